//! Synthesized API scenarios against the smooth mesh definition.

use opkit_tests::prelude::*;

mod values {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("SmoothMesh")
            .definition("smooth_mesh.json")
            .calls("smooth_mesh.calls")
            .step("read_defaults", |a| a.value(1))
            .step("set_passes", |a| a.null())
            .step("read_passes", |a| a.value(4))
            .step("passes_below_min", |a| a.error("Range constraint violated"))
            .step("read_passes", |a| a.value(4))
            .step("fixed_points", |a| a.value(17))
            .step("fixed_points_untouched", |a| a.value(0))
            .step("fixed_points_out_of_range", |a| a.error("Value index 3 out of range"))
    }

    #[test]
    fn test_value_accessors_round_trip() {
        scenario().run().unwrap();
    }
}

mod optional {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("SmoothMesh")
            .definition("smooth_mesh.json")
            .calls("smooth_mesh.calls")
            .step("relaxation_starts_disabled", |a| a.value(false))
            .step("enable_relaxation", |a| a.value(true))
            .step("set_relaxation", |a| a.value(0.25))
            .step("debug_toggle", |a| a.value(true))
    }

    #[test]
    fn test_optional_accessors_toggle_state() {
        scenario().run().unwrap();
    }
}

mod discrete {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("SmoothMesh")
            .definition("smooth_mesh.json")
            .calls("smooth_mesh.calls")
            .step("method_default", |a| a.value(0))
            .step("choose_taubin", |a| a.value("taubin"))
            .step("bad_choice", |a| a.error("Discrete choice 7 out of range"))
            .step("value_outside_choices", |a| a.error("not one of the discrete values"))
    }

    #[test]
    fn test_discrete_accessors_select_choices() {
        scenario().run().unwrap();
    }
}

mod errors {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("SmoothMesh")
            .definition("smooth_mesh.json")
            .calls("smooth_mesh.calls")
            .step("no_value_methods_on_void", |a| a.error("Unknown method: debug"))
            .step("wrong_arity", |a| a.error_matches(r"expected \(enabled\), got 0"))
            .step("wrong_argument_kind", |a| a.error("expected Bool"))
    }

    #[test]
    fn test_call_errors_are_reported() {
        scenario().run().unwrap();
    }
}
