//! Test module.


use unittest::ColorChoice;

pub fn demo_tests(color: ColorChoice) -> anyhow::Result<()> {
    info!("running example tests");

    basic::basic_tests(color);
    timing::timing_tests(color)?;
    unittest_demo::attribute_tests();

    if unittest::tests_failed() {
        warn!("some example tests failed");
    }
    Ok(())
}
