//! Client console configure view: the daemon's config file content.
//!
//! Read-only here; edits go through the config file on disk. `R` asks the
//! daemon to reload it, `r` refetches the shown content.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::FetchSlot;
use crate::theme::Locale;
use crate::ui::RenderCtx;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    slot: &FetchSlot<String>,
    reload: &FetchSlot<()>,
    ctx: &RenderCtx,
) {
    super::render_slot(frame, area, slot, ctx, |frame, area, config| {
        let title = match ctx.locale {
            Locale::ZhCn => " 配置文件 (R 重载) ",
            Locale::EnUs => " Configuration (R reloads) ",
        };
        let mut block = super::bordered(ctx).title(title);
        if let Some(status) = reload_status(reload, ctx) {
            block = block.title(status.right_aligned());
        }
        frame.render_widget(
            Paragraph::new(config.as_str())
                .style(Style::new().fg(ctx.palette.fg))
                .block(block),
            area,
        );
    });
}

/// Status line for the last reload request, until the next fetch clears it.
fn reload_status(reload: &FetchSlot<()>, ctx: &RenderCtx) -> Option<Line<'static>> {
    let (text, color) = match (reload, ctx.locale) {
        (FetchSlot::Idle, _) => return None,
        (FetchSlot::Loading, Locale::ZhCn) => (" 重载中 ... ".to_string(), ctx.palette.warn),
        (FetchSlot::Loading, Locale::EnUs) => (" reloading ... ".to_string(), ctx.palette.warn),
        (FetchSlot::Ready(()), Locale::ZhCn) => (" 已重载 ".to_string(), ctx.palette.ok),
        (FetchSlot::Ready(()), Locale::EnUs) => (" reloaded ".to_string(), ctx.palette.ok),
        (FetchSlot::Failed(err), Locale::ZhCn) => {
            (format!(" 重载失败: {err} "), ctx.palette.err)
        }
        (FetchSlot::Failed(err), Locale::EnUs) => {
            (format!(" reload failed: {err} "), ctx.palette.err)
        }
    };
    Some(Line::styled(text, Style::new().fg(color)))
}
