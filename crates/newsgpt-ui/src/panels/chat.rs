//! Chat panel — header with reset, error banner, transcript and input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use newsgpt_types::message::ChatMessage;
use newsgpt_types::session::ConversationStatus;
use crate::state::{author_label, format_timestamp, ChatView};
use crate::theme::*;

/// What the user asked for this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Send(String),
    Reset,
}

/// Render the chat panel. Returns an action when the user submits input
/// or presses reset.
pub fn chat_panel(ui: &mut egui::Ui, view: &mut ChatView) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                if header(ui, view) {
                    action = Some(ChatAction::Reset);
                }
                ui.separator();

                if let Some(error) = view.error_banner() {
                    egui::Frame::default()
                        .fill(ERROR_BG)
                        .inner_margin(6.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(error).color(ERROR).small());
                            });
                        });
                }

                let available_height = ui.available_height() - 48.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if view.show_welcome() {
                            welcome(ui);
                        }
                        for message in &view.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }
                        if view.show_thinking() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    RichText::new("NewsGPT is thinking...")
                                        .color(TEXT_MUTED)
                                        .small(),
                                );
                            });
                        }
                    });

                ui.add_space(8.0);

                if let Some(text) = input_row(ui, view) {
                    action = Some(ChatAction::Send(text));
                }
            });
        });

    action
}

/// Title block and reset button. Returns true when reset was clicked.
fn header(ui: &mut egui::Ui, view: &ChatView) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new("NewsGPT").color(TEXT_PRIMARY).strong());
            ui.label(
                RichText::new("Ask me anything about recent news")
                    .color(TEXT_MUTED)
                    .small(),
            );
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = if view.status == ConversationStatus::Resetting {
                "Resetting..."
            } else {
                "Reset Chat"
            };
            clicked = ui
                .add_enabled(view.input_enabled(), egui::Button::new(label))
                .clicked();
        });
    });
    clicked
}

fn welcome(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Welcome to NewsGPT!").color(TEXT_PRIMARY).strong().size(18.0));
        ui.label(
            RichText::new("Ask me anything about recent news and I'll try to help.")
                .color(TEXT_MUTED),
        );
    });
}

fn input_row(ui: &mut egui::Ui, view: &mut ChatView) -> Option<String> {
    let mut submitted = None;

    ui.horizontal(|ui| {
        let enabled = view.input_enabled();
        let input = egui::TextEdit::singleline(&mut view.input_text)
            .hint_text("Ask about recent news...")
            .desired_width(ui.available_width() - 70.0);
        let response = ui.add_enabled(enabled, input);

        let send_btn = ui.add_enabled(
            view.can_send(),
            egui::Button::new("Send")
                .corner_radius(BUBBLE_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter_pressed || send_btn.clicked() {
            submitted = view.take_submission();
            if submitted.is_some() {
                response.request_focus();
            }
        }
    });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let is_user = message.is_user();
    let (bg, fg) = if is_user {
        (USER_BUBBLE, USER_TEXT)
    } else {
        (ASSISTANT_BUBBLE, TEXT_PRIMARY)
    };
    let layout = if is_user {
        Layout::top_down(Align::Max)
    } else {
        Layout::top_down(Align::Min)
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(author_label(message.role)).color(fg).strong().small());
                    ui.label(
                        RichText::new(format_timestamp(message.timestamp))
                            .color(fg.gamma_multiply(0.7))
                            .small(),
                    );
                });
                ui.label(RichText::new(&message.content).color(fg));
            });
    });
}
