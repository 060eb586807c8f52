//! Shared helpers for the Diesel repository suites.
//!
//! Each suite gets its own temporary database on a shared embedded
//! PostgreSQL cluster, migrated with the same embedded migrations the server
//! runs. Set `SKIP_TEST_CLUSTER=1` where the cluster cannot start.

use std::time::Duration;

use lunchmate::domain::ports::UserAccount;
use lunchmate::domain::{InviteCode, Nickname, PasswordHash, User, UserId};
use lunchmate::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use tokio::runtime::Runtime;

const SHARED_CLUSTER_RETRIES: usize = 5;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true", or "yes".
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip when the environment allows it; otherwise fail loudly so CI breakage
/// is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// `PG_PASSWORD` must stay stable when a data directory is reused between
/// test binaries, or later logins fail authentication.
fn ensure_stable_password() {
    if std::env::var_os("PG_PASSWORD").is_none() {
        // SAFETY: runs before the cluster bootstrap spawns any threads.
        unsafe {
            std::env::set_var("PG_PASSWORD", "lunchmate_embedded_test");
        }
    }
}

fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    ensure_stable_password();
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= SHARED_CLUSTER_RETRIES => {
                return Err(format!("shared cluster: {error:?}"));
            }
            Err(_) => {
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

/// A migrated temporary database plus a runtime and pool bound to it.
pub struct TestDatabase {
    pub runtime: Runtime,
    pub pool: DbPool,
    _database: TemporaryDatabase,
}

/// Create and migrate a fresh database and open a small pool against it.
pub fn provision_database() -> Result<TestDatabase, String> {
    let cluster = shared_cluster()?;
    let database_name = format!("test_{}", uuid::Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(database_name.as_str())
        .map_err(|err| format!("create temporary database: {err:?}"))?;
    let url = database.url().to_owned();
    run_pending_migrations(&url).map_err(|err| err.to_string())?;

    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let config = PoolConfig::new(&url).with_max_size(2).with_min_idle(Some(1));
    let pool = runtime
        .block_on(async { DbPool::new(config).await })
        .map_err(|err| err.to_string())?;

    Ok(TestDatabase {
        runtime,
        pool,
        _database: database,
    })
}

/// An account with a fresh id; the hash is never verified by these suites.
pub fn account(nickname: &str, invite_code: &str) -> UserAccount {
    UserAccount {
        user: User::new(
            UserId::random(),
            Nickname::new(nickname).expect("valid nickname"),
            InviteCode::new(invite_code).expect("valid invite code"),
        ),
        password_hash: PasswordHash::new("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
    }
}
