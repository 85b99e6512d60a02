//! Client console overview: every proxy the daemon runs, with its state.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::FetchSlot;
use crate::models::ClientStatus;
use crate::theme::Locale;
use crate::ui::icons::Icon;
use crate::ui::RenderCtx;

pub fn render(frame: &mut Frame, area: Rect, slot: &FetchSlot<ClientStatus>, ctx: &RenderCtx) {
    super::render_slot(frame, area, slot, ctx, |frame, area, status| {
        let header = match ctx.locale {
            Locale::ZhCn => ["", "名称", "类型", "本地地址", "远程地址", "状态"],
            Locale::EnUs => ["", "Name", "Type", "Local", "Remote", "Status"],
        };
        let rows: Vec<Row> = status
            .iter_flat()
            .map(|proxy| {
                let (icon, style) = if proxy.is_running() {
                    (Icon::Ok, Style::new().fg(ctx.palette.ok))
                } else {
                    (Icon::Error, Style::new().fg(ctx.palette.err))
                };
                let state = if proxy.err.is_empty() {
                    proxy.status.clone()
                } else {
                    format!("{}: {}", proxy.status, proxy.err)
                };
                Row::new(vec![
                    Cell::from(icon.glyph()).style(style),
                    Cell::from(proxy.name.clone()),
                    Cell::from(proxy.proxy_type.clone()),
                    Cell::from(proxy.local_addr.clone()),
                    Cell::from(proxy.remote_addr.clone()),
                    Cell::from(state).style(style),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(16),
                Constraint::Length(8),
                Constraint::Length(22),
                Constraint::Length(22),
                Constraint::Min(10),
            ],
        )
        .header(
            Row::new(header.map(Cell::from))
                .style(Style::new().fg(ctx.palette.accent).add_modifier(Modifier::BOLD)),
        )
        .block(super::bordered(ctx));
        frame.render_widget(table, area);
    });
}
