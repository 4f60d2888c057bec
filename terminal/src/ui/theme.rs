//! # GUI Theme
//!
//! Erdtree-style dark theme with gold, parchment, and near-black colors for
//! egui. High contrast with sharp edges, tuned for dense data tables.

use egui::{Color32, Context, Stroke, Visuals};

/// Erdtree color palette
#[derive(Clone)]
pub struct ErdtreeColors {
    /// Near-black background
    pub background: Color32,
    /// Parchment text
    pub text: Color32,
    /// Erdtree gold (primary accent)
    pub gold_primary: Color32,
    /// Dark gold (secondary accent)
    pub gold_dark: Color32,
    /// Dark gray borders
    pub border_dark: Color32,
    /// Success green (backend reachable)
    pub green_success: Color32,
    /// Error red
    pub red_error: Color32,
    /// Warning amber
    pub amber_warning: Color32,
    /// Info blue
    pub blue_info: Color32,
    /// Dark gray for inactive elements
    pub gray_inactive: Color32,
    /// Medium gray for secondary text
    pub gray_secondary: Color32,
}

impl Default for ErdtreeColors {
    fn default() -> Self {
        ErdtreeColors {
            background: Color32::from_rgb(12, 10, 6),         // #0C0A06 - Near black
            text: Color32::from_rgb(232, 220, 196),           // #E8DCC4 - Parchment
            gold_primary: Color32::from_rgb(212, 175, 55),    // #D4AF37 - Erdtree gold
            gold_dark: Color32::from_rgb(140, 110, 40),       // #8C6E28 - Dark gold
            border_dark: Color32::from_rgb(54, 48, 36),       // #363024 - Dark border
            green_success: Color32::from_rgb(80, 200, 120),   // #50C878 - Green
            red_error: Color32::from_rgb(220, 68, 68),        // #DC4444 - Red
            amber_warning: Color32::from_rgb(255, 170, 0),    // #FFAA00 - Amber
            blue_info: Color32::from_rgb(100, 150, 255),      // #6496FF - Blue
            gray_inactive: Color32::from_rgb(30, 27, 20),     // #1E1B14 - Inactive
            gray_secondary: Color32::from_rgb(150, 142, 122), // #968E7A - Secondary text
        }
    }
}

/// Application theme with Erdtree-inspired colors
pub struct Theme {
    /// Color palette
    pub colors: ErdtreeColors,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items (Erdtree gold)
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Success/positive
    pub success: Color32,
    /// Error/negative
    pub error: Color32,
    /// Warning/attention
    pub warning: Color32,
    /// Information
    pub info: Color32,
    /// Background color
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = ErdtreeColors::default();
        Theme {
            normal: colors.text,
            selected: colors.gold_primary,
            border: colors.border_dark,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.amber_warning,
            info: colors.blue_info,
            background: colors.background,
            colors,
        }
    }
}

impl Theme {
    /// Color for a boss tier label.
    pub fn tier_color(&self, tier: &str) -> Color32 {
        match tier {
            "Legendary" => self.colors.gold_primary,
            "Major" => self.colors.amber_warning,
            "Minor" => self.colors.blue_info,
            _ => self.dim,
        }
    }

    /// Create Erdtree-style egui Visuals
    pub fn erdtree_visuals() -> Visuals {
        let colors = ErdtreeColors::default();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        // Background colors
        visuals.faint_bg_color = colors.gray_inactive;
        visuals.extreme_bg_color = colors.background;

        // Panel colors
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.window_stroke = Stroke::new(1.0, colors.border_dark);

        // Non-interactive widgets
        visuals.widgets.noninteractive.bg_fill = colors.gray_inactive;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        // Inactive widgets
        visuals.widgets.inactive.bg_fill = colors.gray_inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(38, 34, 24);

        // Hovered widgets - gold highlight
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(56, 46, 18);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, colors.gold_primary);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(46, 38, 16);

        // Active/pressed widgets - brighter gold
        visuals.widgets.active.bg_fill = Color32::from_rgb(84, 68, 24);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.gold_primary);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(66, 54, 20);

        // Open (expanded) state
        visuals.widgets.open.bg_fill = Color32::from_rgb(56, 46, 18);
        visuals.widgets.open.bg_stroke = Stroke::new(2.0, colors.gold_primary);

        // Selection highlight - gold with transparency
        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(212, 175, 55, 60);
        visuals.selection.stroke = Stroke::new(2.0, colors.gold_primary);

        visuals.hyperlink_color = colors.blue_info;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the Erdtree theme to the egui context.
    pub fn apply(ctx: &Context) {
        ctx.set_visuals(Self::erdtree_visuals());
    }
}
