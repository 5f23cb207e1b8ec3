//! Exit handling: restore the terminal on every way out of the process.

/// Put the tty back into canonical, echoing mode.
fn reset_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit.
extern "C" fn cleanup_on_exit() {
    reset_termios();
    // Escape codes only go to a terminal, never into a pipe
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            const SEQ: &[u8] = b"\x1b[0m\x1b[?25h";
            libc::write(
                libc::STDOUT_FILENO,
                SEQ.as_ptr() as *const libc::c_void,
                SEQ.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit through libc so atexit cleanup runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
