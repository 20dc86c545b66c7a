// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)

use std::fs;
use std::path::Path;

use clap::CommandFactory;

include!("src/cli.rs");

fn render(cmd: clap::Command, title: &str) -> Vec<u8> {
    let mut buffer: Vec<u8> = Vec::new();
    clap_mangen::Man::new(cmd)
        .title(title)
        .render(&mut buffer)
        .expect("failed to render man page");
    buffer
}

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let cmd = Cli::command();

    // One page for the tool and one per subcommand (vercheck-<name>.1)
    let mut pages = vec![("vercheck.1".to_string(), render(cmd.clone(), "vercheck"))];
    for sub in cmd.get_subcommands() {
        let name = format!("vercheck-{}", sub.get_name());
        let page = render(sub.clone(), &name);
        pages.push((format!("{name}.1"), page));
    }

    // Write to the source tree so the pages are available for git commits.
    // Silently skip if the filesystem is read-only (e.g. container linters).
    let man_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("man");
    if fs::create_dir_all(&man_dir).is_ok() {
        for (file_name, page) in pages {
            let _ = fs::write(man_dir.join(file_name), page);
        }
    }
}
