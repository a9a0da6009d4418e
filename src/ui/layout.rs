use ratatui::layout::Rect;

pub const SIDEBAR_WIDTH: u16 = 26;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into sidebar and page content.
///
/// The sidebar is hidden on terminals narrower than three sidebar widths.
pub fn split_sidebar(body: Rect) -> (Rect, Rect) {
    let sidebar_width = if body.width >= SIDEBAR_WIDTH * 3 {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let sidebar = Rect {
        width: sidebar_width,
        ..body
    };
    let content = Rect {
        x: body.x + sidebar_width,
        width: body.width.saturating_sub(sidebar_width),
        ..body
    };
    (sidebar, content)
}

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
