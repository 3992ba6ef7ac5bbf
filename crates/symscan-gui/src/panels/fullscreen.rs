use symscan_core::viewer::{Offset, PointerInput, PointerTarget};

use crate::app::SymscanApp;
use crate::states::PageTexture;

/// Lightbox over the whole window: drag to pan, wheel to zoom, Escape or
/// the close button to leave.
pub fn show(ctx: &egui::Context, app: &mut SymscanApp) {
    if !app.session.viewer().state().fullscreen {
        app.ui_state.fullscreen_toolbar = None;
        return;
    }

    let screen = ctx.screen_rect();
    let container = super::to_size(screen);

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.session.viewer_mut().exit_fullscreen();
        return;
    }
    handle_pointer(ctx, app, container);

    egui::Area::new(egui::Id::new("fullscreen"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter().rect_filled(screen, 0.0, egui::Color32::BLACK);
            // Swallow clicks so nothing underneath reacts.
            ui.allocate_rect(screen, egui::Sense::click_and_drag());

            let texture = app
                .session
                .viewer()
                .current_image()
                .and_then(|locator| app.viewport.get(locator));
            match texture {
                Some(PageTexture::Ready(texture)) => {
                    let state = app.session.viewer().state();
                    let img_rect = super::image_rect(
                        screen,
                        texture.size_vec2(),
                        state.scale,
                        egui::vec2(state.pan.x, state.pan.y),
                    );
                    super::draw_image(ui, texture.id(), img_rect);
                }
                Some(PageTexture::Loading) => {
                    ui.put(screen, egui::Spinner::new().size(48.0));
                }
                Some(PageTexture::Failed) | None => {
                    ui.painter().text(
                        screen.center(),
                        egui::Align2::CENTER_CENTER,
                        "No preview available",
                        egui::FontId::proportional(18.0),
                        egui::Color32::from_gray(160),
                    );
                }
            }
        });

    toolbar(ctx, app);
    app.request_current_image();
}

/// Feed this frame's pointer and wheel state into the viewer.
fn handle_pointer(ctx: &egui::Context, app: &mut SymscanApp, container: symscan_core::viewer::Size) {
    let (pressed, down, released, pos, wheel) = ctx.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
            i.raw_scroll_delta.y,
        )
    });
    let toolbar = app.ui_state.fullscreen_toolbar;
    let viewer = app.session.viewer_mut();
    viewer.set_container(container);

    if let Some(pos) = pos {
        let offset = Offset::new(pos.x, pos.y);
        if pressed {
            let target = if toolbar.is_some_and(|r| r.contains(pos)) {
                PointerTarget::Control
            } else {
                PointerTarget::Surface
            };
            viewer.pointer_down(offset, target);
        } else if down {
            viewer.pointer_move(offset, container);
        }
    }
    if released {
        viewer.pointer_up();
    }
    // egui reports wheel-up as positive; the viewer expects wheel-down positive.
    if wheel != 0.0 {
        viewer.wheel(-wheel, container);
    }
}

fn toolbar(ctx: &egui::Context, app: &mut SymscanApp) {
    let state = app.session.viewer().state().clone();

    let response = egui::Area::new(egui::Id::new("fullscreen_toolbar"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(state.has_previous(), egui::Button::new("<"))
                        .clicked()
                    {
                        app.session.viewer_mut().previous_page();
                    }
                    ui.label(format!("{} / {}", state.current_page, state.total_pages));
                    if ui
                        .add_enabled(state.has_next(), egui::Button::new(">"))
                        .clicked()
                    {
                        app.session.viewer_mut().next_page();
                    }
                    ui.separator();
                    super::viewer::zoom_buttons(ui, app, state.zoom_percent());
                    ui.separator();
                    if ui.button("\u{2716} Close").clicked() {
                        app.session.viewer_mut().exit_fullscreen();
                    }
                });
            });
        });
    app.ui_state.fullscreen_toolbar = Some(response.response.rect);
}
