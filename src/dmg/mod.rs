// Disk-image packaging settings
//
// Typed model of the installer image configuration. The settings are
// loaded from a TOML file, optionally overridden with -D key=value
// defines, and handed to the external disk-image builder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error::{DmgError, DmgResult};

mod define;

pub use self::define::Define;

/// Recognized values for `default_view`
pub const DEFAULT_VIEWS: &[&str] = &["icon-view", "list-view", "column-view", "coverflow"];

/// Recognized values for `label_pos`
pub const LABEL_POSITIONS: &[&str] = &["bottom", "right"];

/// Settings for assembling the distributable disk image
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DmgSettings {
    /// Output image path
    pub filename: String,

    /// Mounted volume name
    pub volume_name: String,

    /// Volume format (see hdiutil create -help)
    pub format: String,

    /// Files to include
    pub files: Vec<String>,

    /// Symlinks to create, name to target
    pub symlinks: BTreeMap<String, String>,

    /// Volume icon, copied onto the image
    pub icon: Option<String>,

    /// Icon used to badge the system's removable disk icon.
    /// Mutually exclusive with `icon`.
    pub badge_icon: Option<String>,

    /// Icon placements in window pixel coordinates
    pub icon_locations: BTreeMap<String, (i32, i32)>,

    /// Background image path
    pub background: Option<String>,

    /// Show the Finder status bar
    pub show_status_bar: bool,
    /// Show the Finder tab view
    pub show_tab_view: bool,
    /// Show the Finder toolbar
    pub show_toolbar: bool,
    /// Show the Finder path bar
    pub show_pathbar: bool,
    /// Show the Finder sidebar
    pub show_sidebar: bool,
    /// Sidebar width in pixels
    pub sidebar_width: u32,

    /// Window position and size in ((x, y), (w, h)) format
    pub window_rect: ((i32, i32), (u32, u32)),

    /// Default view: "icon-view", "list-view", "column-view" or "coverflow"
    pub default_view: String,

    /// Show previews in icons
    pub show_icon_preview: bool,

    /// "auto", "true" or "false"; "auto" includes icon view settings only
    /// when `default_view` is "icon-view"
    pub include_icon_view_settings: String,

    /// "auto", "true" or "false"; "auto" includes list view settings only
    /// when `default_view` is "list-view"
    pub include_list_view_settings: String,

    /// Icon view sort order, None leaves icons where placed
    pub arrange_by: Option<String>,
    /// Icon grid offset in pixels
    pub grid_offset: (i32, i32),
    /// Icon grid spacing in pixels
    pub grid_spacing: u32,
    /// Initial scroll position
    pub scroll_position: (i32, i32),

    /// Label position: "bottom" or "right"
    pub label_pos: String,
    /// Label text size in points
    pub text_size: u32,
    /// Icon size in pixels
    pub icon_size: u32,
}

impl Default for DmgSettings {
    fn default() -> Self {
        let mut symlinks = BTreeMap::new();
        symlinks.insert("Hammerspoon".to_string(), "~/.hammerspoon".to_string());
        symlinks.insert("Applications".to_string(), "/Applications".to_string());

        let mut icon_locations = BTreeMap::new();
        icon_locations.insert("init.lua".to_string(), (110, 161));
        icon_locations.insert("hs".to_string(), (220, 161));
        icon_locations.insert("Hammerspoon".to_string(), (430, 161));

        Self {
            filename: "build/FCPXHacks.dmg".to_string(),
            volume_name: "FCPX Hacks".to_string(),
            format: "UDBZ".to_string(),
            files: vec!["src/init.lua".to_string(), "src/hs".to_string()],
            symlinks,
            icon: None,
            badge_icon: None,
            icon_locations,
            background: Some("dmg/backgroundImage-assets/backgroundImage.png".to_string()),
            show_status_bar: false,
            show_tab_view: false,
            show_toolbar: false,
            show_pathbar: false,
            show_sidebar: false,
            sidebar_width: 180,
            window_rect: ((100, 100), (524, 400)),
            default_view: "icon-view".to_string(),
            show_icon_preview: false,
            include_icon_view_settings: "auto".to_string(),
            include_list_view_settings: "auto".to_string(),
            arrange_by: None,
            grid_offset: (0, 0),
            grid_spacing: 100,
            scroll_position: (0, 0),
            label_pos: "bottom".to_string(),
            text_size: 16,
            icon_size: 64,
        }
    }
}

impl DmgSettings {
    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> DmgResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        debug!("Loaded dmg settings from: {}", path.display());
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> DmgResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render the settings as pretty TOML
    pub fn to_toml(&self) -> DmgResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Render the resolved settings as JSON for the external builder
    pub fn to_json(&self) -> DmgResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply a sequence of command-line defines in order, later wins
    pub fn apply_defines(&mut self, defines: &[Define]) -> DmgResult<()> {
        for define in defines {
            self.apply(define)?;
        }
        Ok(())
    }

    /// Override one recognized setting with a command-line define
    pub fn apply(&mut self, define: &Define) -> DmgResult<()> {
        let value = define.value();
        match define.key() {
            "filename" => self.filename = value.to_string(),
            "volume_name" => self.volume_name = value.to_string(),
            "format" => self.format = value.to_string(),
            "background" => self.background = Some(value.to_string()),
            "icon" => self.icon = Some(value.to_string()),
            "badge_icon" => self.badge_icon = Some(value.to_string()),
            "default_view" => self.default_view = value.to_string(),
            "label_pos" => self.label_pos = value.to_string(),
            "arrange_by" => self.arrange_by = Some(value.to_string()),
            "include_icon_view_settings" => {
                self.include_icon_view_settings = value.to_string();
            }
            "include_list_view_settings" => {
                self.include_list_view_settings = value.to_string();
            }
            "show_status_bar" => self.show_status_bar = parse_bool("show_status_bar", value)?,
            "show_tab_view" => self.show_tab_view = parse_bool("show_tab_view", value)?,
            "show_toolbar" => self.show_toolbar = parse_bool("show_toolbar", value)?,
            "show_pathbar" => self.show_pathbar = parse_bool("show_pathbar", value)?,
            "show_sidebar" => self.show_sidebar = parse_bool("show_sidebar", value)?,
            "show_icon_preview" => {
                self.show_icon_preview = parse_bool("show_icon_preview", value)?;
            }
            "sidebar_width" => self.sidebar_width = parse_u32("sidebar_width", value)?,
            "grid_spacing" => self.grid_spacing = parse_u32("grid_spacing", value)?,
            "text_size" => self.text_size = parse_u32("text_size", value)?,
            "icon_size" => self.icon_size = parse_u32("icon_size", value)?,
            key => return Err(DmgError::UnknownDefine(key.to_string())),
        }
        Ok(())
    }

    /// Check that the settings are usable by the image builder
    pub fn validate(&self) -> DmgResult<()> {
        if self.filename.is_empty() {
            return Err(invalid("filename", "must not be empty"));
        }
        if self.volume_name.is_empty() {
            return Err(invalid("volume_name", "must not be empty"));
        }
        if self.icon.is_some() && self.badge_icon.is_some() {
            return Err(invalid("badge_icon", "icon and badge_icon are mutually exclusive"));
        }
        if !DEFAULT_VIEWS.contains(&self.default_view.as_str()) {
            return Err(invalid(
                "default_view",
                &format!("must be one of {DEFAULT_VIEWS:?}"),
            ));
        }
        if !LABEL_POSITIONS.contains(&self.label_pos.as_str()) {
            return Err(invalid(
                "label_pos",
                &format!("must be one of {LABEL_POSITIONS:?}"),
            ));
        }
        for (key, value) in [
            ("include_icon_view_settings", &self.include_icon_view_settings),
            ("include_list_view_settings", &self.include_list_view_settings),
        ] {
            if !matches!(value.as_str(), "auto" | "true" | "false") {
                return Err(invalid(key, "must be \"auto\", \"true\" or \"false\""));
            }
        }
        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> DmgError {
    DmgError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(key: &str, value: &str) -> DmgResult<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(invalid(key, "expected true/false/1/0")),
    }
}

fn parse_u32(key: &str, value: &str) -> DmgResult<u32> {
    value
        .parse()
        .map_err(|_| invalid(key, "expected an unsigned integer"))
}
