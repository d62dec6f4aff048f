use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::{domain::Department, notification::Severity};

pub const DESTRUCTIVE: egui::Color32 = egui::Color32::from_rgb(185, 28, 28);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Light,
    Dark,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 2] = [ThemePreset::Light, ThemePreset::Dark];

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Light => "Light",
            ThemePreset::Dark => "Dark",
        }
    }
}

pub fn visuals_for_theme(preset: ThemePreset) -> egui::Visuals {
    let mut visuals = match preset {
        ThemePreset::Light => {
            let mut v = egui::Visuals::light();
            v.panel_fill = egui::Color32::from_rgb(248, 250, 252);
            v.faint_bg_color = egui::Color32::WHITE;
            v
        }
        ThemePreset::Dark => {
            let mut v = egui::Visuals::dark();
            v.panel_fill = egui::Color32::from_rgb(24, 24, 27);
            v.faint_bg_color = egui::Color32::from_rgb(39, 39, 42);
            v
        }
    };
    visuals.selection.bg_fill = egui::Color32::from_rgb(37, 99, 235);
    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

/// Badge (fill, text) per department; dark mode inverts the pair.
pub fn department_badge_colors(department: Department, dark_mode: bool) -> (egui::Color32, egui::Color32) {
    let (light, strong) = match department {
        Department::It => ((219, 234, 254), (30, 64, 175)),
        Department::Design => ((243, 232, 255), (107, 33, 168)),
        Department::Management => ((220, 252, 231), (22, 101, 52)),
        Department::Hr => ((255, 237, 213), (154, 52, 18)),
        Department::Marketing => ((252, 231, 243), (157, 23, 77)),
        Department::Sales => ((254, 249, 195), (133, 77, 14)),
    };
    let light = egui::Color32::from_rgb(light.0, light.1, light.2);
    let strong = egui::Color32::from_rgb(strong.0, strong.1, strong.2);
    if dark_mode {
        (strong, light)
    } else {
        (light, strong)
    }
}

pub fn toast_colors(severity: Severity) -> (egui::Color32, egui::Color32) {
    match severity {
        Severity::Success => (
            egui::Color32::from_rgb(22, 101, 52),
            egui::Color32::from_rgb(74, 160, 100),
        ),
        Severity::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Color32::from_rgb(175, 96, 96),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_department_has_distinct_badge() {
        let fills: Vec<egui::Color32> = Department::ALL
            .into_iter()
            .map(|department| department_badge_colors(department, false).0)
            .collect();
        for (index, fill) in fills.iter().enumerate() {
            assert!(!fills[index + 1..].contains(fill));
        }
    }

    #[test]
    fn dark_mode_inverts_badge_pair() {
        let (light_fill, light_text) = department_badge_colors(Department::Sales, false);
        let (dark_fill, dark_text) = department_badge_colors(Department::Sales, true);
        assert_eq!(light_fill, dark_text);
        assert_eq!(light_text, dark_fill);
    }

    #[test]
    fn text_scale_multiplies_default_sizes() {
        let base = egui::Style::default().text_styles;
        let scaled = scaled_text_styles(1.2);
        let body = &egui::TextStyle::Body;
        assert!((scaled[body].size - base[body].size * 1.2).abs() < f32::EPSILON);
    }
}
