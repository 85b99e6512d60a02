//! The defined not-found state for undeclared paths.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Locale;
use crate::ui::RenderCtx;

pub fn render(frame: &mut Frame, area: Rect, path: &str, ctx: &RenderCtx) {
    let (headline, hint) = match ctx.locale {
        Locale::ZhCn => ("404 未找到视图", "按 Esc 返回，或用 1..9 选择一个视图。"),
        Locale::EnUs => (
            "404 no such view",
            "Press Esc to go back, or pick a view with 1..9.",
        ),
    };
    let lines = vec![
        Line::styled(
            format!(" {headline}: {path}"),
            Style::new()
                .fg(ctx.palette.err)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!(" {hint}"), Style::new().fg(ctx.palette.dim)),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(super::bordered(ctx)),
        area,
    );
}
