use super::*;
use crate::foundation::error::ScaleError;
use serde_json::json;
use std::cell::Cell;

/// 360 wide, factor 2.
fn tall() -> StyleScaler {
    StyleScaler::new(ScreenMetrics::new(360.0, 1360.0).unwrap())
}

/// 200 wide, factor 0.5.
fn small() -> StyleScaler {
    StyleScaler::new(ScreenMetrics::new(200.0, 340.0).unwrap())
}

fn legacy(metrics: ScreenMetrics) -> StyleScaler {
    StyleScaler::with_config(metrics, ScalerConfig::legacy()).unwrap()
}

fn run(scaler: &StyleScaler, doc: Value) -> Value {
    scaler.create_json(doc).unwrap()
}

#[test]
fn scale_floors_height_ratio() {
    for h in [568.0, 640.0, 667.0, 736.0, 812.0, 896.0] {
        let s = StyleScaler::new(ScreenMetrics::new(375.0, h).unwrap());
        for v in [0.0, 1.0, 2.5, 10.0, 14.0, 100.0, -3.0] {
            assert_eq!(s.scale(v), (h / 680.0 * v).floor(), "h={h} v={v}");
        }
    }
    assert_eq!(tall().scale(10.0), 20.0);
    assert_eq!(small().scale(3.0), 1.0);
    assert_eq!(small().scale(0.3), 0.0);
}

#[test]
fn baseline_height_is_configurable() {
    let cfg = ScalerConfig {
        baseline_height: 340.0,
        ..ScalerConfig::default()
    };
    let s = StyleScaler::with_config(ScreenMetrics::new(200.0, 340.0).unwrap(), cfg).unwrap();
    assert_eq!(s.scale_factor(), 1.0);
    assert_eq!(s.scale(7.0), 7.0);
}

#[test]
fn ignored_keys_pass_through() {
    let out = run(
        &tall(),
        json!({"flex": 1, "fontWeight": "700", "elevation": 4, "width": 10}),
    );
    assert_eq!(
        out,
        json!({"flex": 1, "fontWeight": "700", "elevation": 4, "width": 20})
    );
}

#[test]
fn ignored_keys_keep_nested_values_verbatim() {
    let out = run(&tall(), json!({"flex": {"value": 3}}));
    assert_eq!(out, json!({"flex": {"value": 3}}));
}

#[test]
fn numbers_and_numeric_strings_are_scaled() {
    let out = run(&tall(), json!({"padding": 8, "margin": "12", "fontSize": 14.5}));
    assert_eq!(out, json!({"padding": 16, "margin": 24, "fontSize": 29}));
}

#[test]
fn border_width_never_scales_below_one() {
    let s = small();
    assert_eq!(run(&s, json!({"borderWidth": 1})), json!({"borderWidth": 1}));
    assert_eq!(run(&s, json!({"borderWidth": "1"})), json!({"borderWidth": 1}));
    assert_eq!(run(&s, json!({"borderWidth": 0})), json!({"borderWidth": 0}));
    assert_eq!(run(&s, json!({"borderWidth": -2})), json!({"borderWidth": -1}));
    assert_eq!(run(&s, json!({"borderWidth": 6})), json!({"borderWidth": 3}));
    assert_eq!(run(&s, json!({"marginTop": 1})), json!({"marginTop": 0}));
}

#[test]
fn viewport_units_resolve_against_screen() {
    let s = tall();
    assert_eq!(run(&s, json!({"width": "50vw"})), json!({"width": 180}));
    assert_eq!(run(&s, json!({"height": "50vh"})), json!({"height": 680}));
    assert_eq!(
        run(&s, json!({"width": "50vw"}))["width"].as_f64(),
        Some(s.screen_width() * 0.5)
    );
}

#[test]
fn other_values_pass_through() {
    let doc = json!({
        "label": "hello",
        "color": "#ff00aa",
        "display": "none",
        "position": "12px",
        "bogus": "xxvw",
        "visible": true,
        "nothing": null
    });
    assert_eq!(run(&tall(), doc.clone()), doc);
}

#[test]
fn create_keeps_keys_and_leaves_input_untouched() {
    let styles =
        style_map_from_json(json!({"a": 1, "b": "50vh", "c": "x", "d": [1], "e": {}}))
            .unwrap();
    let before = styles.clone();
    let out = tall().create(&styles);
    assert_eq!(styles, before);
    assert_eq!(
        out.keys().collect::<Vec<_>>(),
        styles.keys().collect::<Vec<_>>()
    );
}

#[test]
fn create_is_not_idempotent() {
    let s = tall();
    let once = run(&s, json!({"width": 10}));
    let twice = run(&s, once.clone());
    assert_eq!(once, json!({"width": 20}));
    assert_eq!(twice, json!({"width": 40}));
}

#[test]
fn ignored_wrapper_emits_inner_value_in_both_modes() {
    let m = ScreenMetrics::new(360.0, 1360.0).unwrap();
    for s in [tall(), legacy(m)] {
        assert_eq!(
            run(&s, json!({"margin": {"ignored": true, "value": 10}})),
            json!({"margin": 10})
        );
        assert_eq!(
            run(&s, json!({"margin": {"ignored": 1, "value": "50vw"}})),
            json!({"margin": "50vw"})
        );
        assert_eq!(
            run(&s, json!({"margin": {"ignored": true}})),
            json!({"margin": null})
        );
    }
}

#[test]
fn unwrap_mode_scales_inner_value_under_outer_key() {
    let s = tall();
    assert_eq!(
        run(&s, json!({"margin": {"ignored": false, "value": 10}})),
        json!({"margin": 20})
    );
    assert_eq!(
        run(&s, json!({"margin": {"value": "50vw"}})),
        json!({"margin": 180})
    );
    assert_eq!(
        run(&small(), json!({"borderWidth": {"ignored": false, "value": 1}})),
        json!({"borderWidth": 1})
    );
}

#[test]
fn unwrap_mode_keeps_objects_with_extra_keys() {
    let s = tall();
    assert_eq!(
        run(&s, json!({"textShadow": {"value": 2, "width": 5, "color": "red"}})),
        json!({"textShadow": {"value": 4, "width": 10, "color": "red"}})
    );
    assert_eq!(
        run(&s, json!({"margin": {"ignored": false, "value": 3, "top": "1"}})),
        json!({"margin": {"ignored": false, "value": 6, "top": 2}})
    );
}

#[test]
fn recurse_mode_scales_the_wrapper_itself() {
    let s = legacy(ScreenMetrics::new(360.0, 1360.0).unwrap());
    assert_eq!(
        run(&s, json!({"margin": {"ignored": false, "value": 10}})),
        json!({"margin": {"ignored": false, "value": 20}})
    );
}

#[test]
fn plain_nested_styles_are_scaled_in_both_modes() {
    let m = ScreenMetrics::new(360.0, 1360.0).unwrap();
    for s in [tall(), legacy(m)] {
        assert_eq!(
            run(
                &s,
                json!({"shadowOffset": {"width": 2, "height": "3"}, "shadowOpacity": "0.5"})
            ),
            json!({"shadowOffset": {"width": 4, "height": 6}, "shadowOpacity": 1})
        );
    }
}

#[test]
fn arrays_are_scaled_element_wise() {
    let out = run(
        &tall(),
        json!({"transform": [10, "5", "50vw", "auto", {"rotate": "45deg"}]}),
    );
    assert_eq!(
        out,
        json!({"transform": [20, 10, 180, "auto", {"rotate": "45deg"}]})
    );

    let wrapped = json!({"margin": [{"ignored": false, "value": 10}, {"ignored": true, "value": 4}]});
    assert_eq!(run(&tall(), wrapped.clone()), wrapped);
}

#[test]
fn preserve_mode_stores_arrays_unscaled() {
    let s = legacy(ScreenMetrics::new(360.0, 1360.0).unwrap());
    let doc = json!({"transform": [10, "50vw", "auto"], "width": 10});
    assert_eq!(
        run(&s, doc),
        json!({"transform": [10, "50vw", "auto"], "width": 20})
    );
}

#[test]
fn screen_percentages() {
    let s = tall();
    assert_eq!(s.screen_width(), 360.0);
    assert_eq!(s.screen_width_pct(50.0), 180.0);
    assert_eq!(s.screen_height(), 1360.0);
    assert_eq!(s.screen_height_pct(25.0), 340.0);
    assert_eq!(s.screen_height_pct(0.0), 0.0);
}

#[test]
fn scalers_for_different_screens_are_independent() {
    let a = tall();
    let b = small();
    let doc = json!({"width": 10});
    assert_eq!(run(&a, doc.clone()), json!({"width": 20}));
    assert_eq!(run(&b, doc.clone()), json!({"width": 5}));
    assert_eq!(run(&a, doc), json!({"width": 20}));
}

struct CountingSource {
    calls: Cell<u32>,
    metrics: ScreenMetrics,
}

impl MetricsSource for CountingSource {
    fn window_metrics(&self) -> ScaleResult<ScreenMetrics> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.metrics)
    }
}

#[test]
fn from_source_queries_host_once() {
    let source = CountingSource {
        calls: Cell::new(0),
        metrics: ScreenMetrics::new(360.0, 1360.0).unwrap(),
    };
    let s = StyleScaler::from_source(&source, ScalerConfig::default()).unwrap();
    run(&s, json!({"width": "50vw", "height": 3}));
    s.screen_height();
    assert_eq!(source.calls.get(), 1);
    assert_eq!(s.metrics(), source.metrics);
}

struct FailingSource;

impl MetricsSource for FailingSource {
    fn window_metrics(&self) -> ScaleResult<ScreenMetrics> {
        Err(ScaleError::metrics("no window"))
    }
}

#[test]
fn from_source_propagates_host_errors() {
    let err = StyleScaler::from_source(&FailingSource, ScalerConfig::default()).unwrap_err();
    assert!(err.to_string().contains("no window"));
}

#[test]
fn with_config_validates() {
    let cfg = ScalerConfig {
        baseline_height: -1.0,
        ..ScalerConfig::default()
    };
    let m = ScreenMetrics::new(360.0, 640.0).unwrap();
    assert!(matches!(
        StyleScaler::with_config(m, cfg),
        Err(ScaleError::Config(_))
    ));
}

#[test]
fn create_json_rejects_non_objects() {
    let err = tall().create_json(json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, ScaleError::Style(_)));
}
