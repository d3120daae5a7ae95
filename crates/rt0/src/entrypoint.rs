#[macro_export]
macro_rules! entrypoint {
    ($func:path) => {
        /// True process entry point. The loader transfers control here with
        /// no startup code before it and nothing to return into after it.
        #[unsafe(no_mangle)]
        pub extern "C" fn _start() -> ! {
            $func();
            $crate::syscall::exit(0)
        }

        #[panic_handler]
        fn panic(_info: &core::panic::PanicInfo) -> ! {
            // Fixture logic is total; this exists to satisfy the
            // freestanding target. 101 matches the status std uses.
            $crate::syscall::exit(101)
        }
    };
}
