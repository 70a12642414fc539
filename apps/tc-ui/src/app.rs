use crate::calc_worker::CalcWorker;
use std::sync::Arc;
use std::time::Duration;
use tc_api::{CalculationResult, HttpCalculationClient};
use tc_app::{FormController, FormEvent, FormState, format_value};
use tc_core::{Property, Substance};

pub struct ThermocalcApp {
    controller: FormController<Arc<HttpCalculationClient>>,
    worker: Option<CalcWorker>,
}

impl ThermocalcApp {
    pub fn new(client: HttpCalculationClient) -> Self {
        Self {
            controller: FormController::new(Arc::new(client)),
            worker: None,
        }
    }

    fn poll_worker(&mut self) {
        let Some(worker) = &self.worker else {
            return;
        };
        if let Some(outcome) = worker.poll() {
            self.worker = None;
            self.controller.finish_submit(outcome);
        }
    }

    fn start_calculation(&mut self) {
        if let Some(request) = self.controller.begin_submit() {
            let service = Arc::clone(self.controller.service());
            self.worker = Some(CalcWorker::start(service, request));
        }
    }
}

impl eframe::App for ThermocalcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        let mut events = Vec::new();
        let mut submit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Thermodynamic Property Calculator");
            ui.separator();

            let state = self.controller.state();
            form_fields(ui, state, &mut events);

            if let Some(error) = &state.error {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.add_space(8.0);
            let (enabled, label) = calculate_button(state);
            if ui
                .add_enabled(enabled, egui::Button::new(label))
                .clicked()
            {
                submit = true;
            }

            if let Some(result) = &state.results {
                ui.add_space(12.0);
                results_panel(ui, result);
            }
        });

        for event in events {
            self.controller.dispatch(event);
        }
        if submit {
            self.start_calculation();
        }

        if self.worker.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

/// Whether the Calculate button is enabled, and its caption.
fn calculate_button(state: &FormState) -> (bool, &'static str) {
    let label = if state.loading {
        "Calculating..."
    } else {
        "Calculate"
    };
    (state.can_submit(), label)
}

fn form_fields(ui: &mut egui::Ui, state: &FormState, events: &mut Vec<FormEvent>) {
    egui::Grid::new("calc_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Substance:");
            let mut substance = state.substance;
            egui::ComboBox::from_id_salt("substance")
                .selected_text(substance.map_or("Select substance", |s| s.display_name()))
                .show_ui(ui, |ui| {
                    for option in Substance::ALL {
                        ui.selectable_value(&mut substance, Some(option), option.display_name());
                    }
                });
            if substance != state.substance {
                events.push(FormEvent::SubstanceSelected(substance));
            }
            ui.end_row();

            ui.label("First Property:");
            let mut first = state.first_property;
            property_combo(ui, "first_property", &mut first, &Property::FIRST);
            if first != state.first_property {
                events.push(FormEvent::FirstPropertySelected(first));
            }
            ui.end_row();

            ui.label("First Value:");
            let mut first_value = state.first_value.clone();
            if ui.text_edit_singleline(&mut first_value).changed() {
                events.push(FormEvent::FirstValueChanged(first_value));
            }
            ui.end_row();

            ui.label("Second Property:");
            let mut second = state.second_property;
            ui.add_enabled_ui(state.second_property_enabled(), |ui| {
                property_combo(
                    ui,
                    "second_property",
                    &mut second,
                    &state.available_second_properties(),
                );
            });
            if second != state.second_property {
                events.push(FormEvent::SecondPropertySelected(second));
            }
            ui.end_row();

            if state.shows_second_value() {
                ui.label("Second Value:");
                let mut second_value = state.second_value.clone();
                if ui.text_edit_singleline(&mut second_value).changed() {
                    events.push(FormEvent::SecondValueChanged(second_value));
                }
                ui.end_row();
            }
        });
}

fn property_combo(
    ui: &mut egui::Ui,
    id: &str,
    selected: &mut Option<Property>,
    options: &[Property],
) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.map_or("Select property", |p| p.label()))
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(selected, Some(*option), option.label());
            }
        });
}

fn results_panel(ui: &mut egui::Ui, result: &CalculationResult) {
    ui.group(|ui| {
        ui.strong("State Information");
        egui::Grid::new("state_info")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label("State:");
                ui.label(&result.state);
                ui.end_row();
                ui.label("Details:");
                ui.label(&result.details);
                ui.end_row();
            });
    });

    let Some(props) = &result.saturation_properties else {
        return;
    };
    if props.is_empty() {
        return;
    }

    ui.add_space(8.0);
    ui.group(|ui| {
        ui.strong("Saturation Properties");
        egui::Grid::new("saturation_properties")
            .num_columns(2)
            .striped(true)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for prop in props.iter() {
                    ui.label(format!("{}:", prop.name));
                    ui.monospace(format_value(prop.value));
                    ui.end_row();
                }
            });
    });
}
