use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Init,
    Verify {
        #[clap(long)]
        upstream_owner: Option<String>,
        #[clap(long)]
        upstream_repo: Option<String>,
        #[clap(long)]
        base_branch: Option<String>,
        #[clap(long)]
        pr_branch: Option<String>,
        #[clap(long)]
        ignored_paths: Option<String>,
        #[clap(long)]
        token: Option<String>,
    },
    Validate,
}
