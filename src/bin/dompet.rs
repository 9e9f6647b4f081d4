use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};

use dompet_rs::{
    Config, Confirm, Ledger, LogNotifier, Notification, RemoveOutcome, dashboard::DashboardSummary,
    export_csv, format_rupiah, local_now, setup_logging,
    stores::{FileStore, LedgerStore},
    transaction::{
        SortBy, TimeRange, Transaction, TransactionDraft, TransactionId, TransactionQuery,
        TransactionType, TypeFilter, format_short_date_label, group_by_day, parse_date, query,
    },
};

/// Record income and expenses from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the ledger file. Overrides the config file.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Path to a JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canonical timezone used to work out today's date, e.g. "Asia/Jakarta".
    /// Overrides the config file.
    #[arg(long)]
    timezone: Option<String>,

    /// Append debug logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a transaction.
    Add {
        /// What the transaction was for.
        #[arg(long)]
        description: String,

        /// The amount in Rupiah, must be greater than zero.
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// Either "income" or "expense".
        #[arg(long = "type")]
        transaction_type: TransactionType,

        /// Defaults to the first suggested category for the type.
        #[arg(long)]
        category: Option<String>,

        /// A YYYY-MM-DD date. Defaults to today.
        #[arg(long, value_parser = parse_date)]
        date: Option<time::Date>,
    },

    /// List transactions grouped by day.
    List {
        /// Only show "income" or "expense" transactions, or "all".
        #[arg(long = "type", default_value_t = TypeFilter::All)]
        type_filter: TypeFilter,

        /// Only show transactions whose description or category contains this text.
        #[arg(long, default_value = "")]
        search: String,

        /// One of "date-desc", "date-asc", "amount-desc" or "amount-asc".
        #[arg(long, default_value_t = SortBy::DateDesc)]
        sort: SortBy,
    },

    /// Delete a transaction by ID.
    Delete {
        id: TransactionId,

        /// Do not ask for confirmation.
        #[arg(long)]
        yes: bool,
    },

    /// Show totals and statistics.
    Dashboard {
        /// Summarise "all" transactions, this "month" or the last seven days ("week").
        #[arg(long, default_value_t = TimeRange::All)]
        range: TimeRange,
    },

    /// Write every transaction as CSV.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Asks on stderr and reads the answer from stdin.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "ya" | "yes"),
            Err(error) => {
                tracing::error!("Could not read confirmation: {error}");
                false
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(args.log_file.as_deref())?;

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(timezone) = args.timezone {
        config.timezone = timezone;
    }

    let now = local_now(&config.timezone)?;
    let store = LedgerStore::with_slot(FileStore::new(&config.data_dir), &config.slot);
    let mut ledger = Ledger::new(store, config.categories.clone(), LogNotifier);

    match args.command {
        Command::Add {
            description,
            amount,
            transaction_type,
            category,
            date,
        } => {
            let draft = TransactionDraft::new(&description, &amount, transaction_type)
                .category(category.as_deref())
                .date(date);
            let transaction = ledger.add(draft, now)?;
            let notification = Notification::transaction_added(&transaction);

            println!("{}: {}", notification.title, notification.body);
            println!("{}", format_row(&transaction));
        }
        Command::List {
            type_filter,
            search,
            sort,
        } => {
            let options = TransactionQuery {
                type_filter,
                search_term: search,
                sort_by: sort,
            };
            let groups = group_by_day(query(&ledger.transactions(), &options));

            if groups.is_empty() {
                println!("Belum ada transaksi.");
            }
            for group in groups {
                println!("{}", group.label);
                for transaction in &group.transactions {
                    println!("  {}", format_row(transaction));
                }
            }
        }
        Command::Delete { id, yes } => {
            let outcome = if yes {
                ledger.remove(id, &mut |_: &str| true)?
            } else {
                ledger.remove(id, &mut StdinConfirm)?
            };

            match outcome {
                RemoveOutcome::Removed => println!("Transaksi {id} dihapus."),
                RemoveOutcome::NotFound => println!("Transaksi {id} tidak ditemukan."),
                RemoveOutcome::Declined => println!("Dibatalkan."),
            }
        }
        Command::Dashboard { range } => {
            let summary = DashboardSummary::build(&ledger.transactions(), range, now.date());
            print_dashboard(&summary);
        }
        Command::Export { output } => {
            let transactions = ledger.transactions();
            match output {
                Some(path) => export_csv(&transactions, File::create(path)?)?,
                None => export_csv(&transactions, io::stdout().lock())?,
            }
        }
    }

    Ok(())
}

fn format_row(transaction: &Transaction) -> String {
    let sign = match transaction.transaction_type {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };

    format!(
        "[{}] {} {}{} {} ({})",
        transaction.id,
        format_short_date_label(transaction.date),
        sign,
        format_rupiah(transaction.amount),
        transaction.description,
        transaction.category
    )
}

fn print_dashboard(summary: &DashboardSummary) {
    println!("Periode: {}", summary.time_range);
    println!("Saldo: {}", format_rupiah(summary.totals.balance));
    println!(
        "Pemasukan: {} ({} transaksi)",
        format_rupiah(summary.totals.income),
        summary.income_count
    );
    println!(
        "Pengeluaran: {} ({} transaksi)",
        format_rupiah(summary.totals.expense),
        summary.expense_count
    );
    println!(
        "Rata-rata pengeluaran: {}",
        format_rupiah(summary.average_expense)
    );
    println!("Transaksi terbesar: {}", format_rupiah(summary.max_amount));
    println!("Tingkat tabungan: {}%", summary.saving_rate);

    if !summary.is_balance_healthy() {
        println!("Pengeluaran melebihi pemasukan.");
    }

    if !summary.top_categories.is_empty() {
        println!();
        println!("Kategori teratas:");
        for share in &summary.top_categories {
            println!(
                "  {} {} ({:.0}%)",
                share.category,
                format_rupiah(share.amount),
                share.percentage
            );
        }
    }

    if !summary.recent.is_empty() {
        println!();
        println!("Transaksi terakhir:");
        for transaction in &summary.recent {
            println!("  {}", format_row(transaction));
        }
    }
}
