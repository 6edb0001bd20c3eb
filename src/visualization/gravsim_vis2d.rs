use bevy::input::mouse::MouseWheel;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::utils::{HashMap, HashSet};
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::configuration::config::{MOVE_SPEED_MAX, MOVE_SPEED_MIN};
use crate::simulation::registry::{BodyCommand, BodyEdit, BodyRegistry, CommandFeedback, NewBody};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyId, ColorChannel, NVec2, Rgb, MASS_MAX, MASS_MIN, RADIUS_MAX, RADIUS_MIN};

/// Component tagging each circle with the registry body it draws
#[derive(Component)]
struct BodyMarker(pub BodyId);

/// Unit circle shared by every body, scaled by the body radius
#[derive(Resource)]
struct CircleMesh(Mesh2dHandle);

const ZOOM_IN: f32 = 0.9;
const ZOOM_OUT: f32 = 1.1;

/// Spacing between bodies along z so registry order decides what is drawn on top
const Z_STEP: f32 = 0.001;

/// Just inside the default 2D far plane (1000), so bodies from z = 0 upwards are visible
const CAMERA_Z: f32 = 999.9;

/// Inputs of the "Create Object" panel
struct CreateForm {
    name: String,
    radius: f32,
    color: [i32; 3],
    x: [f64; 2],
    v: [f64; 2],
    m: f64,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            radius: 15.0,
            color: [255, 255, 255],
            x: [650.0, 550.0],
            v: [0.0, 0.0],
            m: 1.0e13,
        }
    }
}

impl CreateForm {
    fn to_new_body(&self) -> NewBody {
        NewBody {
            name: self.name.clone(),
            radius: self.radius as f64,
            color: Rgb::from_channels(self.color[0] as i64, self.color[1] as i64, self.color[2] as i64),
            x: NVec2::new(self.x[0], self.x[1]),
            m: self.m,
            v: NVec2::new(self.v[0], self.v[1]),
        }
    }
}

/// GUI-only state, never read by the physics
#[derive(Resource, Default)]
struct UiState {
    show_create: bool,
    form: CreateForm,
    feedback: CommandFeedback, // last rejected command, shown inline
}

pub fn run_2d(scenario: Scenario) {
    let window = Window {
        title: "Gravity Simulation!".into(),
        resolution: (scenario.view.width, scenario.view.height).into(),
        ..Default::default()
    };

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .init_resource::<UiState>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .add_plugins(EguiPlugin)
        .add_systems(Startup, setup_view_system)
        .add_systems(
            Update,
            (
                camera_controls_system,
                help_panel_system,
                body_panels_system,
                create_panel_system,
                physics_step_system,
                sync_bodies_system,
            )
                .chain(),
        )
        .run();
}

/// Screen-style coordinates (y down) to Bevy world coordinates (y up)
fn to_world(x: &NVec2) -> Vec2 {
    Vec2::new(x.x as f32, -(x.y as f32))
}

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c.r, c.g, c.b)
}

/// Camera placement looking at `center`
pub fn camera_transform(center: Vec2) -> Transform {
    Transform::from_xyz(center.x, center.y, CAMERA_Z)
}

/// Registry index per body; later bodies are drawn on top
pub fn draw_order(registry: &BodyRegistry) -> HashMap<BodyId, usize> {
    registry
        .iter()
        .enumerate()
        .map(|(i, b)| (b.id, i))
        .collect()
}

fn show_feedback(ui: &mut egui::Ui, feedback: &CommandFeedback) {
    if let Some(msg) = feedback.message() {
        ui.colored_label(egui::Color32::RED, msg);
    }
}

fn setup_view_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>) {
    info!(
        "gravsim: starting 2D viewer with {} objects",
        scenario.registry.len()
    );

    // Start centred on the scenario's centre of mass
    commands.spawn(Camera2dBundle {
        transform: camera_transform(to_world(&scenario.registry.center_of_mass())),
        ..Default::default()
    });

    commands.insert_resource(CircleMesh(Mesh2dHandle(meshes.add(Circle::new(1.0)))));
}

/// Arrow keys / WASD pan by `move_speed` per press, mouse wheel zooms
fn camera_controls_system(
    mut contexts: EguiContexts,
    keys: Res<ButtonInput<KeyCode>>,
    mut wheel: EventReader<MouseWheel>,
    scenario: Res<Scenario>,
    mut camera: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    let ctx = contexts.ctx_mut();
    let keyboard_free = !ctx.wants_keyboard_input();
    let pointer_free = !ctx.wants_pointer_input();

    let Ok((mut transform, mut projection)) = camera.get_single_mut() else {
        wheel.clear();
        return;
    };

    if keyboard_free {
        let speed = scenario.view.move_speed;
        let mut step = Vec2::ZERO;
        for key in keys.get_just_pressed() {
            match key {
                KeyCode::ArrowUp | KeyCode::KeyW => step.y += speed,
                KeyCode::ArrowDown | KeyCode::KeyS => step.y -= speed,
                KeyCode::ArrowRight | KeyCode::KeyD => step.x += speed,
                KeyCode::ArrowLeft | KeyCode::KeyA => step.x -= speed,
                _ => {}
            }
        }
        // pan distance is in screen pixels
        transform.translation += (step * projection.scale).extend(0.0);
    }

    for ev in wheel.read() {
        if !pointer_free {
            continue;
        }
        if ev.y > 0.0 {
            projection.scale *= ZOOM_IN;
        } else if ev.y < 0.0 {
            projection.scale *= ZOOM_OUT;
        }
    }
}

fn help_panel_system(mut contexts: EguiContexts, mut scenario: ResMut<Scenario>, mut ui_state: ResMut<UiState>) {
    let ctx = contexts.ctx_mut();
    egui::Window::new("How to move around")
        .default_pos(egui::pos2(10.0, 10.0))
        .show(ctx, |ui| {
            ui.label("Move around - Arrow Keys (or) WASD");
            ui.label("Zoom in and out - Mouse wheel");

            ui.separator();
            ui.heading("Simulator Settings");
            ui.add(
                egui::Slider::new(&mut scenario.view.move_speed, MOVE_SPEED_MIN..=MOVE_SPEED_MAX)
                    .text("Screen Move Speed"),
            );
            ui.label(format!("Objects: {}", scenario.registry.len()));
            ui.label(format!("Time: {:.2} s", scenario.t));
            ui.checkbox(&mut ui_state.show_create, "Show \"Create Object\"");
            show_feedback(ui, &ui_state.feedback);
        });
}

/// One property window per object; edits and deletes are queued, never applied here
fn body_panels_system(mut contexts: EguiContexts, mut scenario: ResMut<Scenario>) {
    let ctx = contexts.ctx_mut();
    let mut commands = Vec::new();

    for body in scenario.registry.iter() {
        let name = body.name.clone();
        egui::Window::new(name.as_str())
            .id(egui::Id::new(("object", body.id.0)))
            .show(ctx, |ui| {
                ui.heading("Edit Properties");
                let mut radius = body.radius() as f32;
                if ui
                    .add(egui::Slider::new(&mut radius, RADIUS_MIN as f32..=RADIUS_MAX as f32).text("Radius"))
                    .changed()
                {
                    commands.push(BodyCommand::Edit(name.clone(), BodyEdit::Radius(radius as f64)));
                }

                ui.separator();
                ui.heading("Color - RGB");
                for (channel, label) in [
                    (ColorChannel::Red, "Red"),
                    (ColorChannel::Green, "Green"),
                    (ColorChannel::Blue, "Blue"),
                ] {
                    let mut value = body.color.channel(channel) as i32;
                    if ui.add(egui::Slider::new(&mut value, 0..=255).text(label)).changed() {
                        commands.push(BodyCommand::Edit(
                            name.clone(),
                            BodyEdit::Channel(channel, value as i64),
                        ));
                    }
                }

                ui.separator();
                let mut mass = body.mass();
                if ui
                    .add(egui::Slider::new(&mut mass, MASS_MIN..=MASS_MAX).logarithmic(true).text("Mass"))
                    .changed()
                {
                    commands.push(BodyCommand::Edit(name.clone(), BodyEdit::Mass(mass)));
                }

                ui.separator();
                if ui.button("Delete").clicked() {
                    commands.push(BodyCommand::Delete(name.clone()));
                }
            });
    }

    for command in commands {
        scenario.registry.submit(command);
    }
}

fn create_panel_system(mut contexts: EguiContexts, mut scenario: ResMut<Scenario>, mut ui_state: ResMut<UiState>) {
    if !ui_state.show_create {
        return;
    }

    let ctx = contexts.ctx_mut();
    let UiState { show_create, form, feedback } = &mut *ui_state;
    let mut submit = false;

    egui::Window::new("Create Object")
        .open(show_create)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut form.name);
            });
            ui.add(egui::Slider::new(&mut form.radius, RADIUS_MIN as f32..=RADIUS_MAX as f32).text("Radius"));
            ui.add(egui::Slider::new(&mut form.color[0], 0..=255).text("Red"));
            ui.add(egui::Slider::new(&mut form.color[1], 0..=255).text("Green"));
            ui.add(egui::Slider::new(&mut form.color[2], 0..=255).text("Blue"));
            ui.add(egui::Slider::new(&mut form.m, MASS_MIN..=MASS_MAX).logarithmic(true).text("Mass"));
            ui.horizontal(|ui| {
                ui.label("Position");
                ui.add(egui::DragValue::new(&mut form.x[0]).speed(1.0));
                ui.add(egui::DragValue::new(&mut form.x[1]).speed(1.0));
            });
            ui.horizontal(|ui| {
                ui.label("Velocity");
                ui.add(egui::DragValue::new(&mut form.v[0]).speed(0.5));
                ui.add(egui::DragValue::new(&mut form.v[1]).speed(0.5));
            });

            if ui.button("Create").clicked() {
                submit = true;
            }
            show_feedback(ui, feedback);
        });

    if submit {
        scenario.registry.submit(BodyCommand::Create(form.to_new_body()));
    }
}

/// Apply queued commands, then one physics pass with the frame time
fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>, mut ui_state: ResMut<UiState>) {
    let reports = scenario.frame(time.delta_seconds_f64());

    if !reports.is_empty() {
        ui_state.feedback.record(&reports);
    }
}

/// Spawn circles for new objects, despawn deleted ones, copy state to the rest
fn sync_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    circle: Res<CircleMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &BodyMarker, &mut Transform, &Handle<ColorMaterial>)>,
) {
    let registry = &scenario.registry;
    let bodies = registry.bodies();
    let order = draw_order(registry);
    let mut drawn = HashSet::new();

    for (entity, BodyMarker(id), mut transform, material) in &mut query {
        let Some(&i) = order.get(id) else {
            commands.entity(entity).despawn();
            continue;
        };
        let body = &bodies[i];
        drawn.insert(*id);

        transform.translation = to_world(&body.x).extend(i as f32 * Z_STEP);
        transform.scale = Vec3::splat(body.radius() as f32);

        // only touch the asset when the color changed, get_mut marks it modified
        let color = to_color(body.color);
        if materials.get(material).is_some_and(|mat| mat.color != color) {
            if let Some(mat) = materials.get_mut(material) {
                mat.color = color;
            }
        }
    }

    for (i, body) in registry.iter().enumerate() {
        if drawn.contains(&body.id) {
            continue;
        }
        let mut transform = Transform::from_translation(to_world(&body.x).extend(i as f32 * Z_STEP));
        transform.scale = Vec3::splat(body.radius() as f32);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.0.clone(),
                material: materials.add(ColorMaterial::from(to_color(body.color))),
                transform,
                ..Default::default()
            },
            BodyMarker(body.id),
        ));
    }
}
