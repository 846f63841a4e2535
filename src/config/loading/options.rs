//! The compiled option table.
//!
//! One entry per field of [`Config`](crate::config::Config). Defaults live in the section
//! structs; entries here only bind a name to its storage and validator.

use super::registry::{Accessor, OptionDescriptor, Slot};
use crate::config::values::{Bounds, Color, Gaps, Gradient, Vec2};

macro_rules! field {
    ($($path:ident).+) => {
        |config| &mut config.$($path).+
    };
}

const NON_NEGATIVE: Option<Bounds<i64>> = Some(Bounds::at_least(0));
const POSITIVE: Option<Bounds<i64>> = Some(Bounds::at_least(1));
const UNIT: Option<Bounds<f32>> = Some(Bounds::between(0.0, 1.0));

const fn flag(name: &'static str, field: Accessor<bool>) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Bool(field))
}

const fn int(name: &'static str, field: Accessor<i64>, bounds: Option<Bounds<i64>>) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Int(field, bounds))
}

const fn float(name: &'static str, field: Accessor<f32>, bounds: Option<Bounds<f32>>) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Float(field, bounds))
}

const fn choice(name: &'static str, field: Accessor<i64>, allowed: &'static [i64]) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Choice(field, allowed))
}

const fn keyword(
    name: &'static str,
    field: Accessor<String>,
    allowed: &'static [&'static str],
) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Keyword(field, allowed))
}

const fn text(name: &'static str, field: Accessor<String>) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Text(field))
}

const fn color(name: &'static str, field: Accessor<Color>) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Color(field))
}

const fn gradient(name: &'static str, field: Accessor<Gradient>) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Gradient(field))
}

const fn gaps(name: &'static str, field: Accessor<Gaps>) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Gaps(field))
}

const fn vec2(name: &'static str, field: Accessor<Vec2>) -> OptionDescriptor {
    OptionDescriptor::new(name, Slot::Vec2(field))
}

/// Every option, in section order.
pub(crate) fn all() -> Vec<OptionDescriptor> {
    let mut options = Vec::with_capacity(180);
    options.extend(general());
    options.extend(decoration());
    options.extend(animations());
    options.extend(input());
    options.extend(gestures());
    options.extend(group());
    options.extend(misc());
    options.extend(binds());
    options.extend(backends());
    options.extend(debug());
    options
}

fn general() -> Vec<OptionDescriptor> {
    vec![
        float("general.sensitivity", field!(general.sensitivity), None),
        int("general.border_size", field!(general.border_size), NON_NEGATIVE),
        flag(
            "general.no_border_on_floating",
            field!(general.no_border_on_floating),
        ),
        gaps("general.gaps_in", field!(general.gaps_in)),
        gaps("general.gaps_out", field!(general.gaps_out)),
        int(
            "general.gaps_workspaces",
            field!(general.gaps_workspaces),
            NON_NEGATIVE,
        ),
        gradient(
            "general.col.inactive_border",
            field!(general.col_inactive_border),
        ),
        gradient("general.col.active_border", field!(general.col_active_border)),
        gradient(
            "general.col.nogroup_border",
            field!(general.col_nogroup_border),
        ),
        gradient(
            "general.col.nogroup_border_active",
            field!(general.col_nogroup_border_active),
        ),
        int(
            "general.cursor_inactive_timeout",
            field!(general.cursor_inactive_timeout),
            NON_NEGATIVE,
        ),
        keyword("general.layout", field!(general.layout), &["dwindle", "master"]),
        flag("general.no_cursor_warps", field!(general.no_cursor_warps)),
        flag("general.no_focus_fallback", field!(general.no_focus_fallback)),
        flag("general.apply_sens_to_raw", field!(general.apply_sens_to_raw)),
        flag("general.resize_on_border", field!(general.resize_on_border)),
        int(
            "general.extend_border_grab_area",
            field!(general.extend_border_grab_area),
            NON_NEGATIVE,
        ),
        flag(
            "general.hover_icon_on_border",
            field!(general.hover_icon_on_border),
        ),
        flag("general.allow_tearing", field!(general.allow_tearing)),
        choice(
            "general.resize_corner",
            field!(general.resize_corner),
            &[0, 1, 2, 3, 4],
        ),
    ]
}

fn decoration() -> Vec<OptionDescriptor> {
    vec![
        int("decoration.rounding", field!(decoration.rounding), NON_NEGATIVE),
        float(
            "decoration.active_opacity",
            field!(decoration.active_opacity),
            UNIT,
        ),
        float(
            "decoration.inactive_opacity",
            field!(decoration.inactive_opacity),
            UNIT,
        ),
        float(
            "decoration.fullscreen_opacity",
            field!(decoration.fullscreen_opacity),
            UNIT,
        ),
        flag("decoration.drop_shadow", field!(decoration.drop_shadow)),
        int(
            "decoration.shadow_range",
            field!(decoration.shadow_range),
            NON_NEGATIVE,
        ),
        int(
            "decoration.shadow_render_power",
            field!(decoration.shadow_render_power),
            Some(Bounds::between(1, 4)),
        ),
        flag(
            "decoration.shadow_ignore_window",
            field!(decoration.shadow_ignore_window),
        ),
        color("decoration.col.shadow", field!(decoration.col_shadow)),
        color(
            "decoration.col.shadow_inactive",
            field!(decoration.col_shadow_inactive),
        ),
        vec2("decoration.shadow_offset", field!(decoration.shadow_offset)),
        float("decoration.shadow_scale", field!(decoration.shadow_scale), UNIT),
        flag("decoration.dim_inactive", field!(decoration.dim_inactive)),
        float("decoration.dim_strength", field!(decoration.dim_strength), UNIT),
        float("decoration.dim_special", field!(decoration.dim_special), UNIT),
        float("decoration.dim_around", field!(decoration.dim_around), UNIT),
        text("decoration.screen_shader", field!(decoration.screen_shader)),
        flag("decoration.blur.enabled", field!(decoration.blur.enabled)),
        int("decoration.blur.size", field!(decoration.blur.size), POSITIVE),
        int(
            "decoration.blur.passes",
            field!(decoration.blur.passes),
            Some(Bounds::between(1, 10)),
        ),
        flag(
            "decoration.blur.ignore_opacity",
            field!(decoration.blur.ignore_opacity),
        ),
        flag(
            "decoration.blur.new_optimizations",
            field!(decoration.blur.new_optimizations),
        ),
        flag("decoration.blur.xray", field!(decoration.blur.xray)),
        float("decoration.blur.noise", field!(decoration.blur.noise), UNIT),
        float(
            "decoration.blur.contrast",
            field!(decoration.blur.contrast),
            Some(Bounds::between(0.0, 2.0)),
        ),
        float(
            "decoration.blur.brightness",
            field!(decoration.blur.brightness),
            Some(Bounds::between(0.0, 2.0)),
        ),
        float(
            "decoration.blur.vibrancy",
            field!(decoration.blur.vibrancy),
            UNIT,
        ),
        float(
            "decoration.blur.vibrancy_darkness",
            field!(decoration.blur.vibrancy_darkness),
            UNIT,
        ),
        flag("decoration.blur.special", field!(decoration.blur.special)),
        flag("decoration.blur.popups", field!(decoration.blur.popups)),
        float(
            "decoration.blur.popups_ignorealpha",
            field!(decoration.blur.popups_ignorealpha),
            UNIT,
        ),
    ]
}

fn animations() -> Vec<OptionDescriptor> {
    vec![
        flag("animations.enabled", field!(animations.enabled)),
        flag(
            "animations.first_launch_animation",
            field!(animations.first_launch_animation),
        ),
    ]
}

fn input() -> Vec<OptionDescriptor> {
    vec![
        text("input.kb_model", field!(input.kb_model)),
        text("input.kb_layout", field!(input.kb_layout)),
        text("input.kb_variant", field!(input.kb_variant)),
        text("input.kb_options", field!(input.kb_options)),
        text("input.kb_rules", field!(input.kb_rules)),
        text("input.kb_file", field!(input.kb_file)),
        flag("input.numlock_by_default", field!(input.numlock_by_default)),
        flag(
            "input.resolve_binds_by_sym",
            field!(input.resolve_binds_by_sym),
        ),
        int("input.repeat_rate", field!(input.repeat_rate), NON_NEGATIVE),
        int("input.repeat_delay", field!(input.repeat_delay), NON_NEGATIVE),
        float(
            "input.sensitivity",
            field!(input.sensitivity),
            Some(Bounds::between(-1.0, 1.0)),
        ),
        keyword(
            "input.accel_profile",
            field!(input.accel_profile),
            &["", "adaptive", "flat", "custom"],
        ),
        flag("input.force_no_accel", field!(input.force_no_accel)),
        flag("input.left_handed", field!(input.left_handed)),
        text("input.scroll_points", field!(input.scroll_points)),
        keyword(
            "input.scroll_method",
            field!(input.scroll_method),
            &["", "2fg", "edge", "on_button_down", "no_scroll"],
        ),
        int("input.scroll_button", field!(input.scroll_button), NON_NEGATIVE),
        flag("input.scroll_button_lock", field!(input.scroll_button_lock)),
        float(
            "input.scroll_factor",
            field!(input.scroll_factor),
            Some(Bounds::at_least(0.0)),
        ),
        flag("input.natural_scroll", field!(input.natural_scroll)),
        choice("input.follow_mouse", field!(input.follow_mouse), &[0, 1, 2, 3]),
        flag("input.mouse_refocus", field!(input.mouse_refocus)),
        choice(
            "input.float_switch_override_focus",
            field!(input.float_switch_override_focus),
            &[0, 1, 2],
        ),
        flag(
            "input.special_fallthrough",
            field!(input.special_fallthrough),
        ),
        choice(
            "input.off_window_axis_events",
            field!(input.off_window_axis_events),
            &[0, 1, 2, 3],
        ),
    ]
}

fn gestures() -> Vec<OptionDescriptor> {
    vec![
        flag("gestures.workspace_swipe", field!(gestures.workspace_swipe)),
        int(
            "gestures.workspace_swipe_fingers",
            field!(gestures.workspace_swipe_fingers),
            Some(Bounds::at_least(2)),
        ),
        int(
            "gestures.workspace_swipe_distance",
            field!(gestures.workspace_swipe_distance),
            NON_NEGATIVE,
        ),
        flag(
            "gestures.workspace_swipe_touch",
            field!(gestures.workspace_swipe_touch),
        ),
        flag(
            "gestures.workspace_swipe_invert",
            field!(gestures.workspace_swipe_invert),
        ),
        int(
            "gestures.workspace_swipe_min_speed_to_force",
            field!(gestures.workspace_swipe_min_speed_to_force),
            NON_NEGATIVE,
        ),
        float(
            "gestures.workspace_swipe_cancel_ratio",
            field!(gestures.workspace_swipe_cancel_ratio),
            UNIT,
        ),
        flag(
            "gestures.workspace_swipe_create_new",
            field!(gestures.workspace_swipe_create_new),
        ),
        flag(
            "gestures.workspace_swipe_direction_lock",
            field!(gestures.workspace_swipe_direction_lock),
        ),
        int(
            "gestures.workspace_swipe_direction_lock_threshold",
            field!(gestures.workspace_swipe_direction_lock_threshold),
            NON_NEGATIVE,
        ),
        flag(
            "gestures.workspace_swipe_forever",
            field!(gestures.workspace_swipe_forever),
        ),
        flag(
            "gestures.workspace_swipe_use_r",
            field!(gestures.workspace_swipe_use_r),
        ),
    ]
}

fn group() -> Vec<OptionDescriptor> {
    vec![
        flag(
            "group.insert_after_current",
            field!(group.insert_after_current),
        ),
        flag(
            "group.focus_removed_window",
            field!(group.focus_removed_window),
        ),
        gradient("group.col.border_active", field!(group.col_border_active)),
        gradient(
            "group.col.border_inactive",
            field!(group.col_border_inactive),
        ),
        gradient(
            "group.col.border_locked_active",
            field!(group.col_border_locked_active),
        ),
        gradient(
            "group.col.border_locked_inactive",
            field!(group.col_border_locked_inactive),
        ),
        flag("group.groupbar.enabled", field!(group.groupbar.enabled)),
        text(
            "group.groupbar.font_family",
            field!(group.groupbar.font_family),
        ),
        int(
            "group.groupbar.font_size",
            field!(group.groupbar.font_size),
            POSITIVE,
        ),
        flag("group.groupbar.gradients", field!(group.groupbar.gradients)),
        int("group.groupbar.height", field!(group.groupbar.height), POSITIVE),
        int(
            "group.groupbar.priority",
            field!(group.groupbar.priority),
            NON_NEGATIVE,
        ),
        flag(
            "group.groupbar.render_titles",
            field!(group.groupbar.render_titles),
        ),
        flag("group.groupbar.scrolling", field!(group.groupbar.scrolling)),
        color("group.groupbar.text_color", field!(group.groupbar.text_color)),
        gradient("group.groupbar.col.active", field!(group.groupbar.col_active)),
        gradient(
            "group.groupbar.col.inactive",
            field!(group.groupbar.col_inactive),
        ),
        gradient(
            "group.groupbar.col.locked_active",
            field!(group.groupbar.col_locked_active),
        ),
        gradient(
            "group.groupbar.col.locked_inactive",
            field!(group.groupbar.col_locked_inactive),
        ),
    ]
}

fn misc() -> Vec<OptionDescriptor> {
    vec![
        flag(
            "misc.disable_hyprland_logo",
            field!(misc.disable_hyprland_logo),
        ),
        flag(
            "misc.disable_splash_rendering",
            field!(misc.disable_splash_rendering),
        ),
        color("misc.col.splash", field!(misc.col_splash)),
        text("misc.splash_font_family", field!(misc.splash_font_family)),
        choice(
            "misc.force_default_wallpaper",
            field!(misc.force_default_wallpaper),
            &[-1, 0, 1, 2],
        ),
        flag("misc.vfr", field!(misc.vfr)),
        choice("misc.vrr", field!(misc.vrr), &[0, 1, 2]),
        flag(
            "misc.mouse_move_enables_dpms",
            field!(misc.mouse_move_enables_dpms),
        ),
        flag(
            "misc.key_press_enables_dpms",
            field!(misc.key_press_enables_dpms),
        ),
        flag("misc.always_follow_on_dnd", field!(misc.always_follow_on_dnd)),
        flag(
            "misc.layers_hog_keyboard_focus",
            field!(misc.layers_hog_keyboard_focus),
        ),
        flag(
            "misc.animate_manual_resizes",
            field!(misc.animate_manual_resizes),
        ),
        flag(
            "misc.animate_mouse_windowdragging",
            field!(misc.animate_mouse_windowdragging),
        ),
        flag("misc.disable_autoreload", field!(misc.disable_autoreload)),
        flag("misc.enable_swallow", field!(misc.enable_swallow)),
        text("misc.swallow_regex", field!(misc.swallow_regex)),
        text(
            "misc.swallow_exception_regex",
            field!(misc.swallow_exception_regex),
        ),
        flag("misc.focus_on_activate", field!(misc.focus_on_activate)),
        flag("misc.no_direct_scanout", field!(misc.no_direct_scanout)),
        flag("misc.hide_cursor_on_touch", field!(misc.hide_cursor_on_touch)),
        flag(
            "misc.hide_cursor_on_key_press",
            field!(misc.hide_cursor_on_key_press),
        ),
        flag(
            "misc.mouse_move_focuses_monitor",
            field!(misc.mouse_move_focuses_monitor),
        ),
        flag(
            "misc.suppress_portal_warnings",
            field!(misc.suppress_portal_warnings),
        ),
        flag(
            "misc.render_ahead_of_time",
            field!(misc.render_ahead_of_time),
        ),
        int(
            "misc.render_ahead_safezone",
            field!(misc.render_ahead_safezone),
            NON_NEGATIVE,
        ),
        float(
            "misc.cursor_zoom_factor",
            field!(misc.cursor_zoom_factor),
            Some(Bounds::at_least(1.0)),
        ),
        flag("misc.cursor_zoom_rigid", field!(misc.cursor_zoom_rigid)),
        flag(
            "misc.allow_session_lock_restore",
            field!(misc.allow_session_lock_restore),
        ),
        color("misc.background_color", field!(misc.background_color)),
        flag(
            "misc.close_special_on_empty",
            field!(misc.close_special_on_empty),
        ),
        choice(
            "misc.new_window_takes_over_fullscreen",
            field!(misc.new_window_takes_over_fullscreen),
            &[0, 1, 2],
        ),
        flag("misc.enable_hyprcursor", field!(misc.enable_hyprcursor)),
        choice(
            "misc.initial_workspace_tracking",
            field!(misc.initial_workspace_tracking),
            &[0, 1, 2],
        ),
    ]
}

fn binds() -> Vec<OptionDescriptor> {
    vec![
        flag(
            "binds.pass_mouse_when_bound",
            field!(binds.pass_mouse_when_bound),
        ),
        int(
            "binds.scroll_event_delay",
            field!(binds.scroll_event_delay),
            NON_NEGATIVE,
        ),
        flag(
            "binds.workspace_back_and_forth",
            field!(binds.workspace_back_and_forth),
        ),
        flag(
            "binds.allow_workspace_cycles",
            field!(binds.allow_workspace_cycles),
        ),
        choice(
            "binds.workspace_center_on",
            field!(binds.workspace_center_on),
            &[0, 1],
        ),
        choice(
            "binds.focus_preferred_method",
            field!(binds.focus_preferred_method),
            &[0, 1],
        ),
        flag("binds.ignore_group_lock", field!(binds.ignore_group_lock)),
        flag(
            "binds.movefocus_cycles_fullscreen",
            field!(binds.movefocus_cycles_fullscreen),
        ),
        flag(
            "binds.disable_keybind_grabbing",
            field!(binds.disable_keybind_grabbing),
        ),
    ]
}

fn backends() -> Vec<OptionDescriptor> {
    vec![
        flag(
            "xwayland.use_nearest_neighbor",
            field!(xwayland.use_nearest_neighbor),
        ),
        flag(
            "xwayland.force_zero_scaling",
            field!(xwayland.force_zero_scaling),
        ),
        flag(
            "opengl.nvidia_anti_flicker",
            field!(opengl.nvidia_anti_flicker),
        ),
        choice(
            "opengl.force_introspection",
            field!(opengl.force_introspection),
            &[0, 1, 2],
        ),
    ]
}

fn debug() -> Vec<OptionDescriptor> {
    vec![
        flag("debug.overlay", field!(debug.overlay)),
        flag("debug.damage_blink", field!(debug.damage_blink)),
        flag("debug.disable_logs", field!(debug.disable_logs)),
        flag("debug.disable_time", field!(debug.disable_time)),
        choice(
            "debug.damage_tracking",
            field!(debug.damage_tracking),
            &[0, 1, 2],
        ),
        flag("debug.enable_stdout_logs", field!(debug.enable_stdout_logs)),
        choice("debug.manual_crash", field!(debug.manual_crash), &[0, 1]),
        flag("debug.suppress_errors", field!(debug.suppress_errors)),
        int(
            "debug.watchdog_timeout",
            field!(debug.watchdog_timeout),
            NON_NEGATIVE,
        ),
        flag(
            "debug.disable_scale_checks",
            field!(debug.disable_scale_checks),
        ),
        int("debug.error_limit", field!(debug.error_limit), NON_NEGATIVE),
    ]
}
