//! Regression test parameters and operations

use quadvar_core::{Rect, find_tiling_defect};

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "decompose")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "decompose")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two rectangle sets, ignoring order
    ///
    /// # Returns
    ///
    /// `true` if both sets hold the same rectangles, `false` otherwise.
    pub fn compare_rects(&mut self, expected: &[Rect], actual: &[Rect]) -> bool {
        self.index += 1;

        let mut expected = expected.to_vec();
        let mut actual = actual.to_vec();
        expected.sort_by_key(|r| (r.y, r.x, r.h, r.w));
        actual.sort_by_key(|r| (r.y, r.x, r.h, r.w));

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: rect comparison for index {}\n\
                 expected {} rects, got {}\n\
                 expected = {:?}\n\
                 actual = {:?}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len(),
                expected,
                actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Check that `rects` cover `bounds` exactly once
    ///
    /// # Returns
    ///
    /// `true` for an exact tiling, `false` otherwise.
    pub fn compare_tiling(&mut self, rects: &[Rect], bounds: Rect) -> bool {
        self.index += 1;

        match find_tiling_defect(rects, bounds) {
            None => true,
            Some(defect) => {
                let msg = format!(
                    "Failure in {}_reg: tiling check for index {}\n\
                     {} rects over {:?}: {:?}",
                    self.test_name,
                    self.index,
                    rects.len(),
                    bounds,
                    defect
                );
                self.fail(msg)
            }
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
