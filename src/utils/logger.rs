/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber writing `INFO` and above to
/// standard output
///
/// Calling this more than once is a no-op, so tests can call it freely.
pub fn setup_logger() {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_target(false)
            .finish();

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
