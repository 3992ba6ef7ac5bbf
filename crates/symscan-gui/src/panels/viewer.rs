use symscan_core::aggregate::AggregateRow;

use crate::app::SymscanApp;
use crate::states::PageTexture;

const LEGEND_SWATCH: f32 = 12.0;

pub fn show(ctx: &egui::Context, app: &mut SymscanApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        nav_bar(ui, app);
        if app.session.results().is_some() {
            ui.add_space(2.0);
            legend(ui, &app.session.current_rows());
        }
        ui.add_space(4.0);

        let rect = ui.available_rect_before_wrap();
        ui.painter()
            .rect_filled(rect, 6.0, egui::Color32::from_gray(248));
        let response = ui.allocate_rect(rect, egui::Sense::click());

        if app.session.results().is_none() {
            show_idle(ui, rect, app.session.pipeline().phase().is_running());
            return;
        }

        if !app.session.viewer().state().fullscreen {
            app.session
                .viewer_mut()
                .set_container(super::to_size(rect));
        }
        app.request_current_image();

        let texture = app
            .session
            .viewer()
            .current_image()
            .and_then(|locator| app.viewport.get(locator));

        match texture {
            Some(PageTexture::Ready(texture)) => {
                let state = app.session.viewer().state();
                let img_rect = super::image_rect(
                    rect,
                    texture.size_vec2(),
                    state.scale,
                    egui::vec2(state.pan.x, state.pan.y),
                );
                let mut clipped = ui.new_child(egui::UiBuilder::new().max_rect(rect));
                clipped.set_clip_rect(rect);
                super::draw_image(&clipped, texture.id(), img_rect);

                if response.clicked() {
                    app.session.viewer_mut().enter_fullscreen();
                }
                response.on_hover_cursor(egui::CursorIcon::ZoomIn);
            }
            Some(PageTexture::Loading) => {
                ui.put(rect, egui::Spinner::new().size(32.0));
            }
            Some(PageTexture::Failed) | None => {
                let mut child = ui.new_child(egui::UiBuilder::new().max_rect(rect));
                super::show_placeholder(&mut child, "No preview available");
            }
        }
    });
}

fn nav_bar(ui: &mut egui::Ui, app: &mut SymscanApp) {
    let has_results = app.session.results().is_some();
    let state = app.session.viewer().state().clone();

    ui.horizontal(|ui| {
        ui.add_enabled_ui(has_results, |ui| {
            if ui
                .add_enabled(state.has_previous(), egui::Button::new("<"))
                .clicked()
            {
                app.session.viewer_mut().previous_page();
            }

            ui.label("Page");
            let mut page = state.current_page;
            let response = ui.add(
                egui::DragValue::new(&mut page)
                    .range(1..=state.total_pages)
                    .speed(0.1),
            );
            if response.changed() {
                app.session.viewer_mut().set_page(i64::from(page));
            }
            ui.label(format!("of {}", state.total_pages));

            if ui
                .add_enabled(state.has_next(), egui::Button::new(">"))
                .clicked()
            {
                app.session.viewer_mut().next_page();
            }

            ui.separator();
            zoom_buttons(ui, app, state.zoom_percent());
        });
    });
}

/// Per-class strip for the page on display.
fn legend(ui: &mut egui::Ui, rows: &[AggregateRow]) {
    ui.horizontal_wrapped(|ui| {
        if rows.is_empty() {
            ui.weak("No detected items");
            return;
        }
        for row in rows {
            super::swatch(ui, super::class_color(&row.class_name), LEGEND_SWATCH);
            ui.vertical(|ui| {
                ui.label(&row.class_name);
                ui.small(legend_caption(row));
            });
            ui.add_space(8.0);
        }
    });
}

fn legend_caption(row: &AggregateRow) -> String {
    format!("{} \u{2022} {}", row.count, row.confidence_percent())
}

/// Zoom out, reset (labelled with the current percentage), zoom in.
pub(super) fn zoom_buttons(ui: &mut egui::Ui, app: &mut SymscanApp, percent: u32) {
    if ui.button("\u{2212}").on_hover_text("Zoom out").clicked() {
        app.session.viewer_mut().zoom_out();
    }
    if ui
        .button(format!("{percent}%"))
        .on_hover_text("Reset zoom")
        .clicked()
    {
        app.session.viewer_mut().zoom_reset();
    }
    if ui.button("+").on_hover_text("Zoom in").clicked() {
        app.session.viewer_mut().zoom_in();
    }
}

fn show_idle(ui: &mut egui::Ui, rect: egui::Rect, running: bool) {
    let mut child = ui.new_child(egui::UiBuilder::new().max_rect(rect));
    if running {
        child.centered_and_justified(|ui| {
            ui.add(egui::Spinner::new().size(32.0));
        });
    } else {
        super::show_placeholder(&mut child, "No preview available");
    }
}
