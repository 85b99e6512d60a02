//! Help view: keys and a pointer at the daemon's documentation.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::ConsoleKind;
use crate::theme::Locale;
use crate::ui::RenderCtx;

pub fn render(frame: &mut Frame, area: Rect, kind: ConsoleKind, ctx: &RenderCtx) {
    let lines: Vec<&str> = match ctx.locale {
        Locale::ZhCn => vec![
            "按键:",
            "  Tab / ← →   切换视图",
            "  1..9        跳转到对应视图",
            "  Esc         返回上一个视图",
            "  r           刷新当前视图",
            "  R           重载客户端配置 (配置视图)",
            "  t           切换明暗主题",
            "  q / Ctrl-C  退出",
            "",
            match kind {
                ConsoleKind::Client => "此控制台连接客户端进程的管理端口 (默认 7400)。",
                ConsoleKind::Server => "此控制台连接服务端进程的管理端口 (默认 7500)。",
            },
            "使用 --api 指定其他地址，--user/--password-stdin 提供凭据。",
        ],
        Locale::EnUs => vec![
            "Keys:",
            "  Tab / ← →   switch view",
            "  1..9        jump to a view",
            "  Esc         back to the previous view",
            "  r           refresh the current view",
            "  R           reload the daemon config (configure view)",
            "  t           toggle light/dark theme",
            "  q / Ctrl-C  quit",
            "",
            match kind {
                ConsoleKind::Client => {
                    "This console talks to the client daemon's admin port (default 7400)."
                }
                ConsoleKind::Server => {
                    "This console talks to the server daemon's admin port (default 7500)."
                }
            },
            "Use --api for another address, --user/--password-stdin for credentials.",
        ],
    };
    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::new().fg(ctx.palette.fg))
            .block(super::bordered(ctx)),
        area,
    );
}
