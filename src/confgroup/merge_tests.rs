//! Tests for the precedence merge.

use super::*;

const JOB: u32 = 11;
const FILE: u32 = 22;
const MODULE: u32 = 33;

fn global() -> GlobalDefaults {
    GlobalDefaults::new(1, 0, 70_000)
}

fn job_with_all() -> Config {
    Config::new()
        .with("name", "job")
        .with("update_every", JOB)
        .with("autodetection_retry", JOB)
        .with("priority", JOB)
}

mod precedence {
    use super::*;

    #[test]
    fn job_beats_every_tier() {
        let file = Defaults::new(FILE, FILE, FILE);
        let module = Defaults::new(MODULE, MODULE, MODULE);

        let values = effective(&job_with_all(), &[Some(&file), Some(&module)], &global());

        assert_eq!(values, GlobalDefaults::new(JOB, JOB, JOB));
    }

    #[test]
    fn file_beats_module() {
        let job = Config::new().with("name", "job");
        let file = Defaults::new(FILE, FILE, FILE);
        let module = Defaults::new(MODULE, MODULE, MODULE);

        let values = effective(&job, &[Some(&file), Some(&module)], &global());

        assert_eq!(values, GlobalDefaults::new(FILE, FILE, FILE));
    }

    #[test]
    fn module_beats_global() {
        let job = Config::new().with("name", "job");
        let module = Defaults::new(MODULE, MODULE, MODULE);

        let values = effective(&job, &[None, Some(&module)], &global());

        assert_eq!(values, GlobalDefaults::new(MODULE, MODULE, MODULE));
    }

    #[test]
    fn global_when_nothing_supplied() {
        let job = Config::new().with("name", "job");
        let empty = Defaults::default();

        let values = effective(&job, &[Some(&empty), Some(&empty)], &global());

        assert_eq!(values, global());
    }

    #[test]
    fn missing_tiers_are_skipped() {
        let job = Config::new().with("name", "job");

        assert_eq!(effective(&job, &[None, None], &global()), global());
        assert_eq!(effective(&job, &[], &global()), global());
    }
}

mod field_independence {
    use super::*;

    #[test]
    fn each_field_from_its_own_tier() {
        let job = Config::new().with("name", "job").with("update_every", JOB);
        let file = Defaults::default().with_autodetection_retry(FILE);
        let module = Defaults::default().with_priority(MODULE);

        let values = effective(&job, &[Some(&file), Some(&module)], &global());

        assert_eq!(values, GlobalDefaults::new(JOB, FILE, MODULE));
    }

    #[test]
    fn partially_filled_tiers_mix_with_global() {
        let job = Config::new().with("name", "job");
        let module = Defaults::default().with_update_every(MODULE);

        let values = effective(&job, &[Some(&module)], &global());

        assert_eq!(values, GlobalDefaults::new(MODULE, 0, 70_000));
    }

    #[test]
    fn explicit_zero_on_job_is_kept() {
        let job = Config::new().with("name", "job").with("autodetection_retry", 0);
        let module = Defaults::new(MODULE, MODULE, MODULE);

        let values = effective(&job, &[Some(&module)], &global());

        assert_eq!(values.autodetection_retry, 0);
    }

    #[test]
    fn invalid_job_value_is_overridden() {
        let job = Config::new().with("name", "job").with("priority", "high");
        let module = Defaults::default().with_priority(MODULE);

        let values = effective(&job, &[Some(&module)], &global());

        assert_eq!(values.priority, MODULE);
    }
}

#[test]
fn apply_writes_values_and_keeps_other_fields() {
    let mut job = Config::new()
        .with("name", "job")
        .with("url", "http://127.0.0.1")
        .with("update_every", JOB);
    let module = Defaults::new(MODULE, MODULE, MODULE);

    apply(&mut job, &[Some(&module)], &global());

    assert_eq!(job.defaults(), Defaults::new(JOB, MODULE, MODULE));
    assert_eq!(job.get("url").and_then(serde_yaml::Value::as_str), Some("http://127.0.0.1"));
}
