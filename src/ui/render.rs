use crate::ui::advice::{render_advice, DisplayState};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, state: &DisplayState) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::default().widget(), header);
    frame.render_widget(Clear, body);
    if body.height > 0 {
        render_advice(frame, body, state);
    }
    frame.render_widget(Footer::new(state).widget(footer.width), footer);
}
