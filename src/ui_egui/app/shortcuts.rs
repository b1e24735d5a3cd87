use super::CalendarApp;
use crate::models::navigation::NavigationDirection;
use crate::services::navigation::Destination;

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        // Month shortcuts only apply while the calendar is showing
        if self.router.active() != Destination::Calendar {
            return;
        }

        let (previous, next, today, clear) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.modifiers.ctrl && i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if previous {
            self.navigate_month(NavigationDirection::Previous);
        }
        if next {
            self.navigate_month(NavigationDirection::Next);
        }
        if today {
            self.go_to_today(Self::today());
        }
        if clear {
            self.calendar.clear_selection();
        }
    }
}
