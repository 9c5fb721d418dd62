// src/templates/notice.rs
use super::copy::{NOTICE_CLOSE_LABEL, NOTICE_CLOSE_TODAY_LABEL, NOTICE_TITLE};
use crate::home::NoticeState;

/// Notice dialog. "Close" only hides it in the browser; "close for today"
/// records the dismissal server side.
pub fn render(notice: &NoticeState) -> String {
    if !notice.visible {
        return String::new();
    }

    format!(
        r#"
    <div class="notice-backdrop" id="notice-modal" role="dialog" aria-modal="true" aria-labelledby="notice-title">
        <div class="notice-dialog">
            <h2 id="notice-title" class="notice-title">{}</h2>
            <div class="notice-body">{}</div>
            <div class="notice-actions">
                <form method="POST" action="/notice/dismiss">
                    <button type="submit" class="btn btn-secondary">{}</button>
                </form>
                <button type="button" class="btn btn-primary"
                    onclick="document.getElementById('notice-modal').remove()">{}</button>
            </div>
        </div>
    </div>
    "#,
        NOTICE_TITLE, notice.html, NOTICE_CLOSE_TODAY_LABEL, NOTICE_CLOSE_LABEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_notice_renders_nothing() {
        assert_eq!(render(&NoticeState::default()), "");
    }

    #[test]
    fn test_visible_notice() {
        let html = render(&NoticeState {
            visible: true,
            html: "<p>Upgrade at 22:00</p>\n".to_string(),
        });

        assert!(html.contains("<p>Upgrade at 22:00</p>"));
        assert!(html.contains(r#"action="/notice/dismiss""#));
    }
}
