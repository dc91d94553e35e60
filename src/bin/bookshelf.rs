//! CLI binary for bookshelf.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use bookshelf::backend::Book;
use bookshelf::{BookRecord, ExportFormat, Identity, Library, LibraryConfig, LibrarySession};
use bookshelf_search::normalize::html_unescape;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Bookshelf: your personal library, searched together with Google Books.
#[derive(Parser)]
#[command(name = "bookshelf", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Username or email to sign in with.
    #[arg(short, long, global = true)]
    login: Option<String>,

    /// Password for --login.
    #[arg(short, long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account; the password is taken from --password.
    Signup { email: String, username: String },

    /// Check that --login and --password are accepted.
    Login,

    /// Search the external catalog and the local library.
    Search {
        query: String,

        /// Select the result at this position (1-based).
        #[arg(short, long)]
        select: Option<usize>,

        /// Add the selected result to your wishlist.
        #[arg(short, long, requires = "select")]
        wishlist: bool,
    },

    /// Manage the local catalog.
    #[command(subcommand)]
    Books(BooksCommand),

    /// Show your wishlist.
    Wishlist,

    /// Show reading statistics.
    Stats,

    /// Export the local catalog.
    Export {
        /// Output format: json or csv.
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Output file (default: timestamped file in the current directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage the configuration file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum BooksCommand {
    /// List every book.
    List,
    /// Add a book.
    Add(BookArgs),
    /// Replace the book stored under TITLE.
    Update {
        #[arg(value_name = "TITLE")]
        current_title: String,
        #[command(flatten)]
        book: BookArgs,
    },
    /// Remove a book.
    Remove { title: String },
}

#[derive(Args)]
struct BookArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    author: String,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    genre: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Image file to attach as the cover.
    #[arg(long)]
    thumbnail: Option<PathBuf>,
    /// Mark the book as read.
    #[arg(long)]
    read: bool,
}

impl BookArgs {
    fn into_book(self) -> anyhow::Result<Book> {
        let mut book = Book::new(self.title, self.author).read(self.read);
        if let Some(year) = self.year {
            book = book.with_year(year);
        }
        if let Some(genre) = self.genre {
            book = book.with_genre(genre);
        }
        if let Some(description) = self.description {
            book = book.with_description(description);
        }
        if let Some(path) = self.thumbnail {
            book = book.with_thumbnail_bytes(&std::fs::read(&path)?);
        }
        Ok(book)
    }
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write the default configuration to the config path.
    Init,
    /// Print the effective configuration.
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bookshelf=info,bookshelf_search=info")),
        )
        .init();

    let cli = Cli::parse();
    let credentials = (cli.login.as_deref(), cli.password.as_deref());
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Signup { email, username } => {
            let Some(password) = credentials.1 else {
                anyhow::bail!("signup needs --password");
            };
            let (library, _) = connect(config_path, (None, None)).await?;
            library.signup(&email, &username, password).await?;
            println!("Account created for {username}.");
        }
        Command::Login => {
            if credentials.0.is_none() {
                anyhow::bail!("pass --login and --password to sign in");
            }
            let (_, session) = connect(config_path, credentials).await?;
            println!(
                "Signed in as {}.",
                session.identity().wishlist_key().unwrap_or_default()
            );
            session.logout();
        }
        Command::Search {
            query,
            select,
            wishlist,
        } => {
            let (library, session) = connect(config_path, credentials).await?;
            run_search(&library, session, &query, select, wishlist).await?;
        }
        Command::Books(command) => {
            let (library, _) = connect(config_path, credentials).await?;
            run_books(&library, command).await?;
        }
        Command::Wishlist => {
            let (library, session) = connect(config_path, credentials).await?;
            for title in library.wishlist(&session).await? {
                println!("{title}");
            }
        }
        Command::Stats => {
            let (library, session) = connect(config_path, credentials).await?;
            let stats = library.stats(&session).await?;
            println!("Books:     {}", stats.total_books);
            println!(
                "Read:      {} ({:.0}%)",
                stats.read_books,
                stats.read_ratio * 100.0
            );
            println!("Wishlist:  {}", stats.wishlist_count);
            if let Some(avg) = stats.average_rating() {
                println!("Avg stars: {avg:.1}");
            }
        }
        Command::Export { format, output } => {
            let (library, _) = connect(config_path, credentials).await?;
            let path = output.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "bookshelf-export-{}.{}",
                    chrono::Local::now().format("%Y%m%d-%H%M%S"),
                    format.extension()
                ))
            });
            let file = BufWriter::new(File::create(&path)?);
            let count = library.export(format, file).await?;
            println!("Exported {count} books to {}", path.display());
        }
        Command::Config(command) => run_config(command, config_path)?,
    }

    Ok(())
}

/// Load config, build the client and open a session, signing in when
/// credentials were given.
async fn connect(
    config_path: Option<&Path>,
    (login, password): (Option<&str>, Option<&str>),
) -> anyhow::Result<(Library, LibrarySession)> {
    let config = LibraryConfig::load(config_path)?;
    let library = Library::from_config(&config)?;
    let session = open_session(&library, login, password).await?;
    Ok((library, session))
}

async fn open_session(
    library: &Library,
    login: Option<&str>,
    password: Option<&str>,
) -> anyhow::Result<LibrarySession> {
    match (login, password) {
        (Some(login), Some(password)) => Ok(library.login(login, password).await?),
        (Some(_), None) => anyhow::bail!("--login needs --password"),
        _ => Ok(LibrarySession::new(Identity::anonymous())),
    }
}

async fn run_search(
    library: &Library,
    mut session: LibrarySession,
    query: &str,
    select: Option<usize>,
    wishlist: bool,
) -> anyhow::Result<()> {
    let results = library.search(&mut session, query).await?;
    if results.is_empty() {
        println!("No results for \"{query}\".");
    }
    for (i, record) in results.iter().enumerate() {
        print_record(i + 1, record);
    }

    if let Some(position) = select {
        let Some(record) = position.checked_sub(1).and_then(|i| results.get(i)).cloned() else {
            anyhow::bail!("no result at position {position}");
        };
        session.search_mut().select(&record);
        println!("\nSelected: {}", html_unescape(&record.title));
        println!("{}", html_unescape(&record.description));
        if wishlist {
            library.add_selected_to_wishlist(&session).await?;
            println!("Added to wishlist.");
        }
    }

    session.logout();
    Ok(())
}

fn print_record(position: usize, record: &BookRecord) {
    println!(
        "{position:>3}. [{}] {} by {}",
        record.source(),
        html_unescape(&record.title),
        html_unescape(&record.author)
    );
}

async fn run_books(library: &Library, command: BooksCommand) -> anyhow::Result<()> {
    match command {
        BooksCommand::List => {
            for book in library.books().await? {
                let mark = if book.is_read { "x" } else { " " };
                let year = book.year.as_deref().unwrap_or("----");
                println!("[{mark}] {year} {} by {}", book.title, book.author);
            }
        }
        BooksCommand::Add(args) => {
            let book = args.into_book()?;
            library.add_book(&book).await?;
            println!("Added \"{}\".", book.title);
        }
        BooksCommand::Update {
            current_title,
            book,
        } => {
            library
                .update_book(&current_title, &book.into_book()?)
                .await?;
            println!("Updated \"{current_title}\".");
        }
        BooksCommand::Remove { title } => {
            library.remove_book(&title).await?;
            println!("Removed \"{title}\".");
        }
    }
    Ok(())
}

fn run_config(command: ConfigCommand, path: Option<&Path>) -> anyhow::Result<()> {
    match command {
        ConfigCommand::Init => {
            let path = path
                .map(PathBuf::from)
                .unwrap_or_else(LibraryConfig::default_config_path);
            if path.exists() {
                anyhow::bail!("{} already exists", path.display());
            }
            LibraryConfig::default().save_to_file(&path)?;
            println!("Wrote {}", path.display());
        }
        ConfigCommand::Show => {
            let config = LibraryConfig::load(path)?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
