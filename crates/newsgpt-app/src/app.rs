//! Main egui application — renders the chat view and dispatches user
//! actions to the conversation controller.

use std::rc::Rc;

use egui::CentralPanel;

use newsgpt_core::controller::ConversationController;
use newsgpt_core::event_bus::EventBus;
use newsgpt_core::ports::ChatBackend;
use newsgpt_ui::panels::chat::{self, ChatAction};
use newsgpt_ui::state::ChatView;
use newsgpt_ui::theme;

pub struct NewsGptApp {
    view: ChatView,
    event_bus: EventBus,
    controller: Rc<ConversationController>,
    first_frame: bool,
}

impl NewsGptApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        backend: Rc<dyn ChatBackend>,
        event_bus: EventBus,
    ) -> Self {
        let controller = Rc::new(ConversationController::new(backend, event_bus.clone()));

        // Initial history load, issued once at construction
        let loader = controller.clone();
        let ctx = cc.egui_ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            loader.load_history().await;
            ctx.request_repaint();
        });

        Self {
            view: ChatView::new(),
            event_bus,
            controller,
            first_frame: true,
        }
    }

    /// Run a controller action without blocking the frame. Overlapping
    /// actions are prevented only by the view disabling its controls.
    fn dispatch(&self, action: ChatAction, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match action {
                ChatAction::Send(text) => controller.send_message(&text).await,
                ChatAction::Reset => controller.reset_session().await,
            }
            ctx.request_repaint();
        });
    }
}

impl eframe::App for NewsGptApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the controller
        if self.event_bus.has_pending() {
            self.view.process_events(self.event_bus.drain());
            ctx.request_repaint();
        }

        if self.view.is_busy() {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = chat::chat_panel(ui, &mut self.view) {
                self.dispatch(action, ctx);
            }
        });
    }
}
