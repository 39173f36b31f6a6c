pub mod question;
pub mod registration;
pub mod result;

use ratatui::Frame;

use crate::tui::{App, Screen};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    match app.screen {
        Screen::Registration => {
            registration::draw_registration(f, area, app);
        }
        Screen::Quiz => {
            question::draw_quiz(f, area, app);
        }
        Screen::Submitting => {
            result::draw_submitting(f, area, app);
        }
        Screen::Results => {
            result::draw_results(f, area, app);
        }
    }
}
