//! Server console overview: the daemon's summary counters.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::FetchSlot;
use crate::models::ServerInfo;
use crate::theme::Locale;
use crate::ui::format::format_bytes;
use crate::ui::RenderCtx;

pub fn render(frame: &mut Frame, area: Rect, slot: &FetchSlot<ServerInfo>, ctx: &RenderCtx) {
    super::render_slot(frame, area, slot, ctx, |frame, area, info| {
        let label = |zh: &'static str, en: &'static str| match ctx.locale {
            Locale::ZhCn => zh,
            Locale::EnUs => en,
        };
        let mut lines = vec![
            counter_line(ctx, label("版本", "Version"), info.version.clone()),
            counter_line(ctx, label("绑定端口", "Bind port"), info.bind_port.to_string()),
            counter_line(
                ctx,
                label("客户端数", "Clients"),
                info.client_counts.to_string(),
            ),
            counter_line(
                ctx,
                label("当前连接", "Current connections"),
                info.cur_conns.to_string(),
            ),
            counter_line(
                ctx,
                label("入站流量", "Traffic in"),
                format_bytes(info.total_traffic_in),
            ),
            counter_line(
                ctx,
                label("出站流量", "Traffic out"),
                format_bytes(info.total_traffic_out),
            ),
        ];
        if !info.proxy_type_counts.is_empty() {
            let counts = info
                .proxy_type_counts
                .iter()
                .map(|(ty, n)| format!("{ty}: {n}"))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(counter_line(ctx, label("代理分布", "Proxies"), counts));
        }
        frame.render_widget(Paragraph::new(lines).block(super::bordered(ctx)), area);
    });
}

fn counter_line(ctx: &RenderCtx, label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<20}"),
            Style::new().fg(ctx.palette.dim),
        ),
        Span::styled(
            value,
            Style::new()
                .fg(ctx.palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
