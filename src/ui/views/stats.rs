//! Server console stats view: today's traffic per proxy, across all types.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::FetchSlot;
use crate::models::ProxyInfo;
use crate::theme::Locale;
use crate::ui::format::format_bytes;
use crate::ui::icons::Icon;
use crate::ui::RenderCtx;

pub fn render(frame: &mut Frame, area: Rect, slot: &FetchSlot<Vec<ProxyInfo>>, ctx: &RenderCtx) {
    super::render_slot(frame, area, slot, ctx, |frame, area, proxies| {
        let title = match ctx.locale {
            Locale::ZhCn => format!(" {} 今日流量 ", Icon::Stats.glyph()),
            Locale::EnUs => format!(" {} Today's traffic ", Icon::Stats.glyph()),
        };
        let header = match ctx.locale {
            Locale::ZhCn => ["名称", "入站", "出站", "连接数"],
            Locale::EnUs => ["Name", "In", "Out", "Conns"],
        };
        let rows: Vec<Row> = proxies
            .iter()
            .map(|proxy| {
                Row::new(vec![
                    Cell::from(proxy.name.clone()),
                    Cell::from(format_bytes(proxy.today_traffic_in)),
                    Cell::from(format_bytes(proxy.today_traffic_out)),
                    Cell::from(proxy.cur_conns.to_string()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Min(8),
            ],
        )
        .header(
            Row::new(header.map(Cell::from))
                .style(Style::new().fg(ctx.palette.accent).add_modifier(Modifier::BOLD)),
        )
        .block(super::bordered(ctx).title(title));
        frame.render_widget(table, area);
    });
}
