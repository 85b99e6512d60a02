//! Server console connections view: proxies of one type and their
//! connection counts. `c` cycles the proxy type.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::FetchSlot;
use crate::models::{ProxyInfo, ProxyType};
use crate::theme::Locale;
use crate::ui::icons::Icon;
use crate::ui::RenderCtx;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    selected: ProxyType,
    slot: &FetchSlot<Vec<ProxyInfo>>,
    ctx: &RenderCtx,
) {
    super::render_slot(frame, area, slot, ctx, |frame, area, proxies| {
        let title = match ctx.locale {
            Locale::ZhCn => format!(" {} {} (c 切换类型) ", Icon::Connections.glyph(), selected),
            Locale::EnUs => format!(" {} {} (c cycles type) ", Icon::Connections.glyph(), selected),
        };
        let header = match ctx.locale {
            Locale::ZhCn => ["名称", "连接数", "客户端版本", "最近启动", "状态"],
            Locale::EnUs => ["Name", "Conns", "Client version", "Last start", "Status"],
        };
        let rows: Vec<Row> = proxies
            .iter()
            .map(|proxy| {
                let style = if proxy.status == "online" {
                    Style::new().fg(ctx.palette.ok)
                } else {
                    Style::new().fg(ctx.palette.dim)
                };
                Row::new(vec![
                    Cell::from(proxy.name.clone()),
                    Cell::from(proxy.cur_conns.to_string()),
                    Cell::from(proxy.client_version.clone()),
                    Cell::from(proxy.last_start_time.clone()),
                    Cell::from(proxy.status.clone()).style(style),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(18),
                Constraint::Length(8),
                Constraint::Length(16),
                Constraint::Length(20),
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
