//! Lets a fuzz target be built as an ordinary binary that replays test cases
//! given as file paths, so that crashes can be debugged without a fuzzing
//! toolchain.

use std::{env, error::Error, ffi::c_int, fs, ptr};

extern "C" {
    // Installs the panic hook that libfuzzer-sys normally installs.
    fn LLVMFuzzerInitialize(
        argc: *const isize,
        argv: *const *const *const u8,
    ) -> c_int;

    // Runs the body of `fuzz_target!` on one input.
    #[allow(improper_ctypes)]
    fn rust_fuzzer_test_input(input: &[u8]) -> i32;
}

#[allow(unused)]
pub fn main() -> Result<(), Box<dyn Error>> {
    // SAFETY: Both functions are defined by libfuzzer-sys, and null
    // arguments are accepted by the initializer.
    unsafe {
        LLVMFuzzerInitialize(ptr::null(), ptr::null());
    }
    let mut replayed = 0usize;
    for path in env::args_os().skip(1) {
        let input = fs::read(&path)?;
        unsafe {
            rust_fuzzer_test_input(&input);
        }
        replayed += 1;
    }
    if replayed == 0 {
        eprintln!("usage: pass one or more test case files to replay");
    } else {
        println!("replayed {replayed} test case(s) without a crash");
    }
    Ok(())
}

#[macro_export]
macro_rules! maybe_define_main {
    () => {
        #[cfg(not(fuzzing))]
        fn main() {
            let _ = $crate::shim::main();
        }
    };
}
