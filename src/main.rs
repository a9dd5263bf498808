//! Golden fixture harness.
//!
//! Loads a case file, evaluates every case twice, and checks results,
//! determinism, and (when present) the pinned digest of all results.
//!
//! Usage: `binary_value [cases.json]`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use binary_value::fixture::{evaluate_all, load_cases};
use binary_value::hashing::canonical_hash;

fn main() {
    let fixture_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(find_default_fixture)
        .expect("Could not find tests/golden/cases.json. Pass a fixture path.");

    let data = fs::read_to_string(&fixture_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", fixture_path.display(), e));
    println!("Loaded fixtures from: {}", fixture_path.display());

    let cases = load_cases(&data).expect("Failed to parse fixtures JSON");

    let mut total = 0;
    let mut passed = 0;
    for case in &cases {
        let got = case.evaluate();
        total += 1;
        if got.value() == case.expected {
            passed += 1;
            println!(
                "[PASS] {:?}({}, {}) = {}",
                case.op, case.lhs, case.rhs, got
            );
        } else {
            println!(
                "[FAIL] {:?}({}, {}): got={} expected={}",
                case.op, case.lhs, case.rhs, got, case.expected
            );
        }
    }

    // Run 2 (determinism check)
    let h1 = canonical_hash(&evaluate_all(&cases));
    let h2 = canonical_hash(&evaluate_all(&cases));
    let mut all_passed = passed == total;
    if h1 != h2 {
        all_passed = false;
        println!("  Determinism fail: run1={} run2={}", h1, h2);
    }

    let hash_path = fixture_path.with_file_name("expected_hash.txt");
    if let Ok(expected) = fs::read_to_string(&hash_path) {
        if h1 != expected.trim() {
            all_passed = false;
            println!("  Hash mismatch: got={} expected={}", h1, expected.trim());
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed, digest={}", passed, total, h1);
    if all_passed {
        println!("[OK] All fixture checks PASSED.");
    } else {
        println!("[FAIL] Some checks failed.");
        std::process::exit(1);
    }
}

fn find_default_fixture() -> Option<PathBuf> {
    ["tests/golden/cases.json", "../tests/golden/cases.json"]
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}
