use warp::sse::Event;

use crate::models::Frame;

/// Render an outbound frame as an SSE event carrying its payload in the
/// data field.
pub fn frame_event(frame: &Frame) -> Event {
    Event::default().data(frame.payload())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_frame_event() {
        // Event construction must not panic for arbitrary fragments
        let _ = frame_event(&Frame::Content("Hello world".to_string()));
        let _ = frame_event(&Frame::Content(String::new()));
        let _ = frame_event(&Frame::Content("line1\nline2".to_string()));
    }

    #[test]
    fn test_done_frame_event() {
        let _ = frame_event(&Frame::Done);
    }

    #[test]
    fn test_frame_payloads_are_single_line() {
        // Multi-line data would split into several data: lines on the
        // wire; every payload we emit must stay on one line.
        let frame = Frame::Content("line1\nline2".to_string());
        assert!(!frame.payload().contains('\n'));
        assert!(!Frame::Done.payload().contains('\n'));
    }
}
