use configurator_core::{ConfiguratorParams, ParamsError};

pub const EXPOSURE_STEP: f32 = 0.1;
pub const FOV_STEP_DEGREES: f32 = 5.0;
pub const BACKGROUND_PRESETS: [&str; 3] = ["#a3a3a3", "#737977", "#202124"];

/// What a key press asks the configurator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleHeight,
    ToggleHud,
    ToggleDebug,
    ToggleShadows,
    ExposureUp,
    ExposureDown,
    FovWider,
    FovNarrower,
    CycleBackground,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Spacebar" | "Enter" => Some(KeyAction::ToggleHeight),
        "h" | "H" => Some(KeyAction::ToggleHud),
        "d" | "D" => Some(KeyAction::ToggleDebug),
        "s" | "S" => Some(KeyAction::ToggleShadows),
        "]" => Some(KeyAction::ExposureUp),
        "[" => Some(KeyAction::ExposureDown),
        "=" | "+" => Some(KeyAction::FovWider),
        "-" | "_" => Some(KeyAction::FovNarrower),
        "b" | "B" => Some(KeyAction::CycleBackground),
        _ => None,
    }
}

/// Apply a parameter-editing action. Returns `Ok(false)` for actions that
/// don't touch the params (height toggle, HUD).
pub fn apply_param_action(
    action: KeyAction,
    params: &mut ConfiguratorParams,
) -> Result<bool, ParamsError> {
    match action {
        KeyAction::ToggleDebug => params.debug = !params.debug,
        KeyAction::ToggleShadows => params.shadows = !params.shadows,
        KeyAction::ExposureUp => params.set_exposure(params.exposure() + EXPOSURE_STEP)?,
        KeyAction::ExposureDown => params.set_exposure(params.exposure() - EXPOSURE_STEP)?,
        KeyAction::FovWider => params.set_fov_degrees(params.fov_degrees() + FOV_STEP_DEGREES)?,
        KeyAction::FovNarrower => {
            params.set_fov_degrees(params.fov_degrees() - FOV_STEP_DEGREES)?
        }
        KeyAction::CycleBackground => {
            let current = params.background.to_hex();
            let next = BACKGROUND_PRESETS
                .iter()
                .position(|p| *p == current)
                .map_or(0, |i| (i + 1) % BACKGROUND_PRESETS.len());
            params.set_background_hex(BACKGROUND_PRESETS[next])?;
        }
        KeyAction::ToggleHeight | KeyAction::ToggleHud => return Ok(false),
    }
    Ok(true)
}
