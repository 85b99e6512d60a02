//! The persistent view shell.
//!
//! Composes the header (title, theme indicator, last refresh), the menu
//! built from the route table, the content region for the active view, and
//! a one-line key hint footer. Owns no state: everything it draws is a pure
//! function of the app's route table, theme snapshot, and view data.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::{Locale, Mode};
use crate::ui::icons::Icon;
use crate::ui::views;
use crate::ui::RenderCtx;

/// Draw the whole shell frame.
pub fn render_shell(frame: &mut Frame, app: &App, ctx: &RenderCtx) {
    let area = frame.area();
    // Fill the background so light mode is actually light.
    frame.render_widget(
        Block::new().style(Style::new().bg(ctx.palette.bg).fg(ctx.palette.fg)),
        area,
    );

    let [header, menu, content, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, app, ctx);
    render_menu(frame, menu, app, ctx);
    views::render_view(frame, content, app, ctx);
    render_footer(frame, footer, ctx);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &RenderCtx) {
    let mode_icon = match ctx.mode {
        Mode::Light => Icon::Sun,
        Mode::Dark => Icon::Moon,
    };
    let refresh = match &app.last_refresh {
        Some(at) => format!("{} {}", Icon::Refresh.glyph(), at.format("%H:%M:%S")),
        None => String::new(),
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {} {} ", Icon::Server.glyph(), app.kind.title(ctx.locale)),
            Style::new()
                .fg(ctx.palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} {}", mode_icon.glyph(), refresh),
            Style::new().fg(ctx.palette.dim),
        ),
    ]);

    let block = Block::bordered().border_style(Style::new().fg(ctx.palette.border));
    frame.render_widget(Paragraph::new(title).block(block), area);
}

/// Menu icon for a view.
fn icon_for(view: crate::routes::ViewId) -> Icon {
    use crate::routes::ViewId;
    match view {
        ViewId::Overview | ViewId::ServerOverview => Icon::Home,
        ViewId::Configure => Icon::Configure,
        ViewId::Help => Icon::Help,
        ViewId::Connections => Icon::Connections,
        ViewId::Stats => Icon::Stats,
    }
}

/// The navigation menu: one entry per declared route, active one marked.
fn render_menu(frame: &mut Frame, area: Rect, app: &App, ctx: &RenderCtx) {
    let active = app.table.active_index();
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for (idx, route) in app.table.routes().iter().enumerate() {
        let label = format!("{} {}", icon_for(route.view).glyph(), route.label(ctx.locale));
        if Some(idx) == active {
            spans.push(Span::styled(
                format!("▶ {} {} ", idx + 1, label),
                Style::new()
                    .fg(ctx.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("  {} {} ", idx + 1, label),
                Style::new().fg(ctx.palette.dim),
            ));
        }
    }
    if active.is_none() {
        spans.push(Span::styled(
            "▶ ? ".to_string(),
            Style::new().fg(ctx.palette.err),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let hint = match ctx.locale {
        Locale::ZhCn => " Tab 切换  r 刷新  t 主题  Esc 返回  q 退出",
        Locale::EnUs => " Tab switch  r refresh  t theme  Esc back  q quit",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::new().fg(ctx.palette.dim)),
        area,
    );
}
