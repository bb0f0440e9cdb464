use projectile_sim::core::aim::AimState;
use projectile_sim::core::motion::ProjectileField;

use crate::controls::PanelMemory;

pub(crate) struct AppRuntime {
    pub(crate) aim: AimState,
    pub(crate) field: ProjectileField,
    pub(crate) paused: bool,
    pub(crate) show_panel: bool,
    pub(crate) panel_memory: PanelMemory,
    pub(crate) shots_fired: u64,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            aim: AimState::default(),
            field: ProjectileField::default(),
            paused: false,
            show_panel: true,
            panel_memory: PanelMemory::default(),
            shots_fired: 0,
            status_line: "Ready".to_string(),
        }
    }
}
