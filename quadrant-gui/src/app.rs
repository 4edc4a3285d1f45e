use eframe::egui;
use egui_extras::{Column, TableBuilder};
use quadrant_core::{
    AiPotential, ControllerState, GridConfig, GridLayout, LocationAxis, MethodAxis,
    ProjectFields, Quadrant, RenderFrame, Session,
};

/// Values held by an add or edit form between frames
#[derive(Default, Clone)]
struct ProjectForm {
    name: String,
    method: MethodAxis,
    location: LocationAxis,
    ai_potential: AiPotential,
}

impl ProjectForm {
    fn from_fields(fields: ProjectFields) -> Self {
        Self {
            name: fields.name,
            method: fields.method,
            location: fields.location,
            ai_potential: AiPotential::resolve(fields.ai_potential),
        }
    }

    fn to_fields(&self) -> ProjectFields {
        ProjectFields::new(self.name.clone(), self.method, self.location)
            .with_ai_potential(self.ai_potential)
    }

    fn quadrant(&self) -> Quadrant {
        Quadrant::from_axes(self.method, self.location)
    }

    fn set_quadrant(&mut self, quadrant: Quadrant) {
        self.method = quadrant.method();
        self.location = quadrant.location();
    }
}

pub struct QuadrantApp {
    session: Session,
    frame: RenderFrame,

    // Form state
    add_form: ProjectForm,
    edit_form: ProjectForm,

    // Messages
    message: Option<(String, bool)>, // (message, is_error)

    // Pending operations, applied at the start of the next update
    pending_select: Option<usize>,
    pending_save: bool,
    pending_delete: bool,
}

impl QuadrantApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GridConfig) -> Self {
        let mut session = Session::new(config);
        let frame = session.render();

        Self {
            session,
            frame,
            add_form: ProjectForm::default(),
            edit_form: ProjectForm::default(),
            message: None,
            pending_select: None,
            pending_save: false,
            pending_delete: false,
        }
    }

    fn add_project(&mut self) {
        match self.session.add(self.add_form.to_fields()) {
            Ok(_) => {
                self.message = Some((format!("Added '{}'", self.add_form.name.trim()), false));
                self.add_form = ProjectForm::default();
            }
            Err(e) => self.message = Some((e.to_string(), true)),
        }
    }

    fn select_point(&mut self, point: usize) {
        match self.session.select_point(point) {
            Ok(project) => {
                self.edit_form = ProjectForm::from_fields(project.fields());
                self.message = None;
            }
            Err(e) => self.message = Some((e.to_string(), true)),
        }
    }

    fn save_edit(&mut self) {
        match self.session.save_edit(self.edit_form.to_fields()) {
            Ok(_) => {
                self.message = Some((format!("Updated '{}'", self.edit_form.name.trim()), false))
            }
            Err(e) => self.message = Some((e.to_string(), true)),
        }
    }

    fn delete_selected(&mut self) {
        match self.session.delete_selected() {
            Ok(removed) => self.message = Some((format!("Deleted '{}'", removed.name), false)),
            Err(e) => self.message = Some((e.to_string(), true)),
        }
    }

    fn show_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.strong(self.frame.title.as_str());
                ui.separator();
                ui.label(project_count(&self.session));
                ui.label(format!("Layout: {}", self.session.config().layout));

                // Show message
                if let Some((msg, is_error)) = &self.message {
                    ui.separator();
                    let color = if *is_error {
                        egui::Color32::RED
                    } else {
                        egui::Color32::GREEN
                    };
                    ui.colored_label(color, msg);
                }
            });
        });
    }

    fn show_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("form_panel")
            .min_width(300.0)
            .show(ctx, |ui| {
                ui.heading("Add Project to Grid");
                ui.separator();

                let four_way = self.session.config().layout == GridLayout::FourByFour;
                let submitted = project_form(ui, "add", &mut self.add_form, four_way);
                let clicked = ui.button("➕ Submit").clicked();
                if submitted || clicked {
                    self.add_project();
                }

                ui.add_space(12.0);
                ui.heading("Projects");
                ui.separator();
                self.show_project_table(ui);
            });
    }

    /// Rows follow store order, the same order the end-of-frame render uses
    fn show_project_table(&mut self, ui: &mut egui::Ui) {
        let selected = self.session_selection();
        let mut clicked = None;

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder().at_least(120.0))
            .column(Column::auto())
            .column(Column::auto())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Quadrant");
                });
                header.col(|ui| {
                    ui.strong("AI");
                });
            })
            .body(|mut body| {
                for (id, project) in self.session.projects().iter().enumerate() {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            if ui
                                .selectable_label(selected == Some(id), project.name.as_str())
                                .clicked()
                            {
                                clicked = Some(id);
                            }
                        });
                        row.col(|ui| {
                            ui.label(project.quadrant().to_string());
                        });
                        row.col(|ui| {
                            ui.label(project.tier().to_string());
                        });
                    });
                }
            });

        if clicked.is_some() {
            self.pending_select = clicked;
        }
    }

    fn show_edit_window(&mut self, ctx: &egui::Context) {
        let Some(project) = self.session.selected() else {
            return;
        };
        let title = format!("Edit '{}'", project.name);
        let four_way = self.session.config().layout == GridLayout::FourByFour;

        let mut open = true;
        let mut cancel = false;
        egui::Window::new(title)
            .id(egui::Id::new("edit_window"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                if project_form(ui, "edit", &mut self.edit_form, four_way) {
                    self.pending_save = true;
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("💾 Save").clicked() {
                        self.pending_save = true;
                    }
                    if ui.button("🗑 Delete").clicked() {
                        self.pending_delete = true;
                    }
                    if ui.button("❌ Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if cancel || !open {
            self.session.cancel();
        }
    }

    fn session_selection(&self) -> Option<usize> {
        match self.session.state() {
            ControllerState::EditSelected { index, .. } => Some(index),
            _ => None,
        }
    }
}

/// Shared add/edit form body; returns true when Enter was pressed in the name field
/// Store size, which can run ahead of the last drawn frame
fn project_count(session: &Session) -> String {
    format!("Projects: {}", session.projects().len())
}

fn project_form(ui: &mut egui::Ui, salt: &str, form: &mut ProjectForm, four_way: bool) -> bool {
    let mut submitted = false;
    egui::Grid::new(format!("{}_form_grid", salt))
        .num_columns(2)
        .spacing([20.0, 8.0])
        .show(ui, |ui| {
            ui.label("Project Name:");
            let response = ui.text_edit_singleline(&mut form.name);
            submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.end_row();

            if four_way {
                ui.label("Quadrant:");
                let mut quadrant = form.quadrant();
                egui::ComboBox::new(format!("{}_quadrant_combo", salt), "")
                    .selected_text(quadrant.to_string())
                    .show_ui(ui, |ui| {
                        for q in Quadrant::ALL {
                            ui.selectable_value(&mut quadrant, q, q.to_string());
                        }
                    });
                form.set_quadrant(quadrant);
                ui.end_row();
            } else {
                ui.label("Method:");
                egui::ComboBox::new(format!("{}_method_combo", salt), "")
                    .selected_text(form.method.to_string())
                    .show_ui(ui, |ui| {
                        for m in MethodAxis::ALL {
                            ui.selectable_value(&mut form.method, m, m.to_string());
                        }
                    });
                ui.end_row();

                ui.label("Location:");
                egui::ComboBox::new(format!("{}_location_combo", salt), "")
                    .selected_text(form.location.to_string())
                    .show_ui(ui, |ui| {
                        for l in LocationAxis::ALL {
                            ui.selectable_value(&mut form.location, l, l.to_string());
                        }
                    });
                ui.end_row();
            }

            ui.label("AI Potential:");
            egui::ComboBox::new(format!("{}_ai_combo", salt), "")
                .selected_text(form.ai_potential.to_string())
                .show_ui(ui, |ui| {
                    for tier in AiPotential::ALL {
                        ui.selectable_value(&mut form.ai_potential, tier, tier.to_string());
                    }
                });
            ui.end_row();
        });
    submitted
}

impl eframe::App for QuadrantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Mutations first, so a selection made on the old frame is checked
        // against whatever they changed
        if std::mem::take(&mut self.pending_save) {
            self.save_edit();
        }
        if std::mem::take(&mut self.pending_delete) {
            self.delete_selected();
        }
        if let Some(point) = self.pending_select.take() {
            self.select_point(point);
        }

        self.show_top_panel(ctx);
        self.show_side_panel(ctx);
        self.show_edit_window(ctx);

        // Re-render after this frame's form submissions
        self.frame = self.session.render();
        let selected = self.session_selection();

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(point) = crate::canvas::show(ui, &self.frame, selected) {
                self.pending_select = Some(point);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_count_tracks_store_not_frame() {
        let mut session = Session::with_seed(GridConfig::default(), 1);
        let frame = session.render();
        session
            .add(ProjectFields::new("Payroll", MethodAxis::Manual, LocationAxis::Onshore))
            .unwrap();

        assert!(frame.points.is_empty());
        assert_eq!(project_count(&session), "Projects: 1");
    }
}
