//! Color themes for doccmp
//!
//! Dark and light palettes plus two catppuccin flavors.

use ratatui::style::Color;

/// Complete color theme for the application
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub panel_bg: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_dim: Color,

    // Comparison row colors
    pub diff_add: Color,
    pub diff_add_bg: Color,
    pub diff_del: Color,
    pub diff_del_bg: Color,
    pub diff_highlight_fg: Color,
    pub diff_highlight_bg: Color,
    pub diff_absent: Color,
    pub page_gutter: Color,

    // Drop zone colors
    pub zone_idle: Color,
    pub zone_hover: Color,
    pub zone_has_file: Color,

    // Filter chips
    pub chip_active_fg: Color,
    pub chip_inactive: Color,

    // UI element colors
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub status_bar_bg: Color,
    pub cursor_color: Color,
    pub help_indicator: Color,
    pub error_fg: Color,

    // Message colors
    pub message_info_fg: Color,
    pub message_info_bg: Color,
    pub message_warning_fg: Color,
    pub message_warning_bg: Color,
    pub message_error_fg: Color,
    pub message_error_bg: Color,

    // Mode indicator colors
    pub mode_fg: Color,
    pub mode_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            panel_bg: Color::Rgb(24, 24, 28),
            bg_highlight: Color::Rgb(70, 70, 70),
            fg_primary: Color::White,
            fg_secondary: Color::Rgb(210, 210, 210),
            fg_dim: Color::Rgb(160, 160, 160),

            diff_add: Color::Rgb(80, 220, 120),
            diff_add_bg: Color::Rgb(0, 60, 20),
            diff_del: Color::Rgb(240, 90, 90),
            diff_del_bg: Color::Rgb(70, 0, 0),
            diff_highlight_fg: Color::Black,
            diff_highlight_bg: Color::Rgb(255, 210, 90),
            diff_absent: Color::Rgb(110, 110, 110),
            page_gutter: Color::Rgb(140, 140, 140),

            zone_idle: Color::Rgb(110, 110, 110),
            zone_hover: Color::Rgb(90, 200, 255),
            zone_has_file: Color::Rgb(80, 220, 120),

            chip_active_fg: Color::Black,
            chip_inactive: Color::Rgb(110, 110, 110),

            border_focused: Color::Rgb(90, 200, 255),
            border_unfocused: Color::Rgb(110, 110, 110),
            status_bar_bg: Color::Rgb(30, 30, 30),
            cursor_color: Color::Rgb(255, 210, 90),
            help_indicator: Color::Rgb(110, 110, 110),
            error_fg: Color::Rgb(240, 90, 90),

            message_info_fg: Color::Black,
            message_info_bg: Color::Cyan,
            message_warning_fg: Color::Black,
            message_warning_bg: Color::Rgb(255, 210, 90),
            message_error_fg: Color::White,
            message_error_bg: Color::Rgb(240, 90, 90),

            mode_fg: Color::Black,
            mode_bg: Color::Rgb(90, 200, 255),
        }
    }

    /// Dark text on light backgrounds
    pub fn light() -> Self {
        Self {
            panel_bg: Color::Rgb(245, 243, 232),
            bg_highlight: Color::Rgb(200, 200, 220),
            fg_primary: Color::Rgb(0, 0, 0),
            fg_secondary: Color::Rgb(30, 30, 30),
            fg_dim: Color::Rgb(80, 80, 80),

            diff_add: Color::Rgb(21, 87, 36),
            diff_add_bg: Color::Rgb(212, 237, 218),
            diff_del: Color::Rgb(114, 28, 36),
            diff_del_bg: Color::Rgb(248, 215, 218),
            diff_highlight_fg: Color::Rgb(0, 0, 0),
            diff_highlight_bg: Color::Rgb(255, 243, 205),
            diff_absent: Color::Rgb(153, 153, 153),
            page_gutter: Color::Rgb(90, 90, 90),

            zone_idle: Color::Rgb(100, 100, 100),
            zone_hover: Color::Rgb(0, 60, 140),
            zone_has_file: Color::Rgb(0, 100, 0),

            chip_active_fg: Color::White,
            chip_inactive: Color::Rgb(150, 150, 150),

            border_focused: Color::Rgb(0, 60, 140),
            border_unfocused: Color::Rgb(100, 100, 100),
            status_bar_bg: Color::Rgb(210, 210, 220),
            cursor_color: Color::Rgb(140, 80, 0),
            help_indicator: Color::Rgb(90, 90, 90),
            error_fg: Color::Rgb(160, 0, 0),

            message_info_fg: Color::Black,
            message_info_bg: Color::Rgb(140, 220, 255),
            message_warning_fg: Color::Black,
            message_warning_bg: Color::Rgb(240, 210, 150),
            message_error_fg: Color::White,
            message_error_bg: Color::Rgb(180, 60, 60),

            mode_fg: Color::White,
            mode_bg: Color::Rgb(0, 80, 160),
        }
    }

    pub fn catppuccin_latte() -> Self {
        Self::from_palette(&Palette {
            text: Color::Rgb(76, 79, 105),
            subtext: Color::Rgb(92, 95, 119),
            muted: Color::Rgb(140, 143, 161),
            surface: Color::Rgb(172, 176, 190),
            highlight: Color::Rgb(188, 192, 204),
            base: Color::Rgb(239, 241, 245),
            mantle: Color::Rgb(230, 233, 239),
            red: Color::Rgb(210, 15, 57),
            yellow: Color::Rgb(223, 142, 29),
            green: Color::Rgb(64, 160, 43),
            teal: Color::Rgb(23, 146, 153),
            blue: Color::Rgb(30, 102, 245),
            lavender: Color::Rgb(114, 135, 253),
            peach: Color::Rgb(254, 100, 11),
        })
    }

    pub fn catppuccin_mocha() -> Self {
        Self::from_palette(&Palette {
            text: Color::Rgb(205, 214, 244),
            subtext: Color::Rgb(186, 194, 222),
            muted: Color::Rgb(127, 132, 156),
            surface: Color::Rgb(88, 91, 112),
            highlight: Color::Rgb(69, 71, 90),
            base: Color::Rgb(30, 30, 46),
            mantle: Color::Rgb(24, 24, 37),
            red: Color::Rgb(243, 139, 168),
            yellow: Color::Rgb(249, 226, 175),
            green: Color::Rgb(166, 227, 161),
            teal: Color::Rgb(148, 226, 213),
            blue: Color::Rgb(137, 180, 250),
            lavender: Color::Rgb(180, 190, 254),
            peach: Color::Rgb(250, 179, 135),
        })
    }

    /// Map a catppuccin palette onto the slots, chips and row colors.
    /// Text on accent backgrounds uses the palette base.
    fn from_palette(p: &Palette) -> Self {
        Self {
            panel_bg: p.base,
            bg_highlight: p.highlight,
            fg_primary: p.text,
            fg_secondary: p.subtext,
            fg_dim: p.muted,

            diff_add: p.green,
            diff_add_bg: tint(p.base, p.green, 20),
            diff_del: p.red,
            diff_del_bg: tint(p.base, p.red, 20),
            diff_highlight_fg: p.base,
            diff_highlight_bg: p.yellow,
            diff_absent: p.muted,
            page_gutter: p.muted,

            zone_idle: p.surface,
            zone_hover: p.blue,
            zone_has_file: p.green,

            chip_active_fg: p.base,
            chip_inactive: p.surface,

            border_focused: p.blue,
            border_unfocused: p.surface,
            status_bar_bg: p.mantle,
            cursor_color: p.peach,
            help_indicator: p.muted,
            error_fg: p.red,

            message_info_fg: p.base,
            message_info_bg: p.teal,
            message_warning_fg: p.base,
            message_warning_bg: p.yellow,
            message_error_fg: p.base,
            message_error_bg: p.red,

            mode_fg: p.base,
            mode_bg: p.lavender,
        }
    }
}

struct Palette {
    text: Color,
    subtext: Color,
    muted: Color,
    surface: Color,
    highlight: Color,
    base: Color,
    mantle: Color,
    red: Color,
    yellow: Color,
    green: Color,
    teal: Color,
    blue: Color,
    lavender: Color,
    peach: Color,
}

/// Mix `percent` of `accent` into `base`. Non-RGB colors can't be mixed and
/// yield the accent.
fn tint(base: Color, accent: Color, percent: u8) -> Color {
    let (Color::Rgb(br, bg, bb), Color::Rgb(ar, ag, ab)) = (base, accent) else {
        return accent;
    };
    let percent = u32::from(percent.min(100));
    let mix = |from: u8, to: u8| {
        let value = u32::from(from) * (100 - percent) + u32::from(to) * percent;
        u8::try_from(value / 100).unwrap_or(u8::MAX)
    };
    Color::Rgb(mix(br, ar), mix(bg, ag), mix(bb, ab))
}

/// Theme selection from CLI argument or config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeArg {
    #[default]
    Dark,
    Light,
    CatppuccinLatte,
    CatppuccinMocha,
}

impl ThemeArg {
    pub const ALL: [ThemeArg; 4] = [
        ThemeArg::Dark,
        ThemeArg::Light,
        ThemeArg::CatppuccinLatte,
        ThemeArg::CatppuccinMocha,
    ];

    /// Case-insensitive lookup by the name used in the CLI and config file.
    pub fn from_str(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(wanted))
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeArg::Dark => "dark",
            ThemeArg::Light => "light",
            ThemeArg::CatppuccinLatte => "catppuccin-latte",
            ThemeArg::CatppuccinMocha => "catppuccin-mocha",
        }
    }

    pub fn valid_values_display() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

pub fn resolve_theme(arg: ThemeArg) -> Theme {
    match arg {
        ThemeArg::Dark => Theme::dark(),
        ThemeArg::Light => Theme::light(),
        ThemeArg::CatppuccinLatte => Theme::catppuccin_latte(),
        ThemeArg::CatppuccinMocha => Theme::catppuccin_mocha(),
    }
}

/// The CLI theme wins; a config theme is used when it names a known theme.
/// Anything else falls back to dark, with a warning for a bad config value.
pub fn choose_theme(
    cli_theme: Option<ThemeArg>,
    config_theme: Option<&str>,
) -> (ThemeArg, Vec<String>) {
    let Some(config_theme) = config_theme.filter(|_| cli_theme.is_none()) else {
        return (cli_theme.unwrap_or_default(), Vec::new());
    };

    match ThemeArg::from_str(config_theme) {
        Some(theme) => (theme, Vec::new()),
        None => (
            ThemeArg::Dark,
            vec![format!(
                "Warning: Unknown theme '{config_theme}' in config, using dark. Valid options: {}",
                ThemeArg::valid_values_display()
            )],
        ),
    }
}
