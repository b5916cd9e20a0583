// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};
use crate::view_models::OptionState;

const NEUTRAL_TEXT: Color32 = Color32::from_rgb(0x63, 0x65, 0x69);
const CORRECT_FILL: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);
const WRONG_FILL: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);

/// Botón de opción coloreado según el feedback. Devuelve `true` si se pulsó.
pub fn option_button(
    ui: &mut Ui,
    label: &str,
    state: OptionState,
    width: f32,
    height: f32,
    enabled: bool,
) -> bool {
    let button = match state {
        OptionState::Neutral => Button::new(RichText::new(label).color(NEUTRAL_TEXT)),
        OptionState::Correct => {
            Button::new(RichText::new(label).color(Color32::WHITE).strong()).fill(CORRECT_FILL)
        }
        OptionState::Wrong => {
            Button::new(RichText::new(label).color(Color32::WHITE).strong()).fill(WRONG_FILL)
        }
    };
    ui.add_enabled(enabled, button.min_size(Vec2::new(width, height)))
        .clicked()
}
