//! Built-in applications and their window presets

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size};
use crate::window::{WindowCapabilities, WindowConfig};

/// Built-in desktop applications. Each runs in at most one window whose id is the
/// app id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    FileBrowser,
    UserManager,
    ControlPanel,
    ActivityMonitor,
    Notifications,
    About,
}

impl AppId {
    pub const ALL: [AppId; 6] = [
        AppId::FileBrowser,
        AppId::UserManager,
        AppId::ControlPanel,
        AppId::ActivityMonitor,
        AppId::Notifications,
        AppId::About,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppId::FileBrowser => "file-browser",
            AppId::UserManager => "user-manager",
            AppId::ControlPanel => "control-panel",
            AppId::ActivityMonitor => "activity-monitor",
            AppId::Notifications => "notifications",
            AppId::About => "about",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.as_str() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            AppId::FileBrowser => "Files",
            AppId::UserManager => "Users & Groups",
            AppId::ControlPanel => "Control Panels",
            AppId::ActivityMonitor => "Activity Monitor",
            AppId::Notifications => "Notifications",
            AppId::About => "About This Desktop",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AppId::FileBrowser => "folder",
            AppId::UserManager => "users",
            AppId::ControlPanel => "control-panel",
            AppId::ActivityMonitor => "monitor",
            AppId::Notifications => "bell",
            AppId::About => "info",
        }
    }
}

/// Per-app sizing preset
struct AppPreset {
    preferred: Size,
    min: Size,
    capabilities: WindowCapabilities,
}

fn preset(app: AppId) -> AppPreset {
    let standard = WindowCapabilities::default();
    match app {
        AppId::FileBrowser => AppPreset {
            preferred: Size::new(640.0, 420.0),
            min: Size::new(320.0, 200.0),
            capabilities: standard,
        },
        AppId::UserManager => AppPreset {
            preferred: Size::new(720.0, 480.0),
            min: Size::new(420.0, 260.0),
            capabilities: standard,
        },
        AppId::ControlPanel => AppPreset {
            preferred: Size::new(520.0, 400.0),
            min: Size::new(360.0, 240.0),
            capabilities: standard,
        },
        AppId::ActivityMonitor => AppPreset {
            preferred: Size::new(560.0, 360.0),
            min: Size::new(360.0, 200.0),
            capabilities: standard,
        },
        AppId::Notifications => AppPreset {
            preferred: Size::new(340.0, 420.0),
            min: Size::new(260.0, 200.0),
            capabilities: WindowCapabilities {
                maximizable: false,
                ..standard
            },
        },
        AppId::About => AppPreset {
            preferred: Size::new(360.0, 240.0),
            min: Size::new(360.0, 240.0),
            capabilities: WindowCapabilities::DIALOG,
        },
    }
}

/// Window config for an app, sized to fit the work area
pub fn window_config(app: AppId, work_area: Rect) -> WindowConfig {
    let preset = preset(app);
    let padding = 20.0;
    let max_w = (work_area.width - padding * 2.0).max(preset.min.width);
    let max_h = (work_area.height - padding * 2.0).max(preset.min.height);

    let mut config = WindowConfig::new(app.as_str(), app.title());
    config.icon = app.icon().to_string();
    config.size = Size::new(preset.preferred.width.min(max_w), preset.preferred.height.min(max_h));
    config.min_size = Some(preset.min);
    if !preset.capabilities.resizable {
        config.max_size = Some(preset.preferred);
    }
    config.capabilities = preset.capabilities;
    config
}
