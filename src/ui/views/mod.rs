//! View bodies mounted by the shell's content region.
//!
//! Every view renders inside its own region only: a failed fetch draws an
//! error panel here while menu, header, and footer stay live.

mod configure;
mod connections;
mod help;
mod not_found;
mod overview;
mod server_overview;
mod stats;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::{App, FetchSlot};
use crate::error::ApiError;
use crate::routes::{ActiveRoute, ViewId};
use crate::theme::Locale;
use crate::ui::icons::Icon;
use crate::ui::RenderCtx;

/// Mount the view bound to the active route.
pub fn render_view(frame: &mut Frame, area: Rect, app: &App, ctx: &RenderCtx) {
    match app.table.current() {
        ActiveRoute::NotFound { path } => not_found::render(frame, area, path, ctx),
        ActiveRoute::Declared(route) => match route.view {
            ViewId::Overview => overview::render(frame, area, &app.client_data.status, ctx),
            ViewId::Configure => configure::render(
                frame,
                area,
                &app.client_data.config,
                &app.client_data.reload,
                ctx,
            ),
            ViewId::Help => help::render(frame, area, app.kind, ctx),
            ViewId::ServerOverview => {
                server_overview::render(frame, area, &app.server_data.info, ctx)
            }
            ViewId::Connections => connections::render(
                frame,
                area,
                app.server_data.selected_type,
                &app.server_data.connections,
                ctx,
            ),
            ViewId::Stats => stats::render(frame, area, &app.server_data.stats, ctx),
        },
    }
}

/// Draw a fetch slot: ready data via `render_ready`, everything else as a
/// region-local placeholder or error panel.
fn render_slot<'a, T>(
    frame: &mut Frame,
    area: Rect,
    slot: &'a FetchSlot<T>,
    ctx: &RenderCtx,
    render_ready: impl FnOnce(&mut Frame, Rect, &'a T),
) {
    match slot {
        FetchSlot::Ready(value) => render_ready(frame, area, value),
        FetchSlot::Idle | FetchSlot::Loading => {
            let text = match ctx.locale {
                Locale::ZhCn => "加载中 ...",
                Locale::EnUs => "loading ...",
            };
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::new().fg(ctx.palette.warn))
                    .block(bordered(ctx)),
                area,
            );
        }
        FetchSlot::Failed(err) => render_error(frame, area, err, ctx),
    }
}

/// Error panel for a failed fetch. Only this region shows it.
fn render_error(frame: &mut Frame, area: Rect, err: &ApiError, ctx: &RenderCtx) {
    let headline = match (err, ctx.locale) {
        (ApiError::Transport(_), Locale::ZhCn) => "无法连接到后端进程",
        (ApiError::Transport(_), Locale::EnUs) => "cannot reach the backend process",
        (ApiError::Status { .. }, Locale::ZhCn) => "后端拒绝了请求",
        (ApiError::Status { .. }, Locale::EnUs) => "the backend rejected the request",
        (ApiError::Decode(_), Locale::ZhCn) => "无法解析后端响应",
        (ApiError::Decode(_), Locale::EnUs) => "cannot decode the backend response",
    };
    let lines = vec![
        Line::styled(
            format!("{} {}", Icon::Error.glyph(), headline),
            Style::new().fg(ctx.palette.err),
        ),
        Line::styled(err.to_string(), Style::new().fg(ctx.palette.dim)),
    ];
    frame.render_widget(Paragraph::new(lines).block(bordered(ctx)), area);
}

fn bordered(ctx: &RenderCtx) -> Block<'static> {
    Block::bordered().border_style(Style::new().fg(ctx.palette.border))
}
