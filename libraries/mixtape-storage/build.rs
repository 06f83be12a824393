//! Rebuild mixtape-storage whenever a migration is added or edited,
//! since `sqlx::migrate!` embeds the directory at compile time.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
