use volunteer_desk::workflows::registration::{
    CompletionReport, RegistrationBoard, ResolvedVolunteer, ScheduleRow, VolunteerRecord,
};

pub(crate) fn print_board(board: &RegistrationBoard) {
    print_section("New applications", &board.new);
    print_section("Waiting list", &board.waiting);
    print_section("Pending mailing", &board.mailing);
    println!();
    println!("{} records in the pipeline", board.total());
}

fn print_section(title: &str, records: &[VolunteerRecord]) {
    println!();
    println!("{title} ({})", records.len());
    if records.is_empty() {
        println!("  (no records)");
        return;
    }
    for record in records {
        println!(
            "  #{:<6} {:<28} {:<18} @{}",
            record.id, record.name, record.phone_number, record.telegram_username
        );
    }
}

pub(crate) fn print_detail(resolved: &ResolvedVolunteer) {
    let record = &resolved.record;
    println!("Record #{}", record.id);
    println!("  Name:     {}", record.name);
    println!("  Phone:    {}", record.phone_number);
    println!("  Telegram: @{}", record.telegram_username);
    if let Some(url) = &record.image_url {
        println!("  Photo:    {url}");
    }
    println!("  Stage:    {}", resolved.stage);
    match resolved.available_action() {
        Some(action) => println!("  Next action: {action}"),
        None => println!("  Registration complete"),
    }
}

pub(crate) fn print_report(report: &CompletionReport) {
    println!("Completed registration for {} volunteers", report.count());
    for name in &report.completed {
        println!("  {name}");
    }
}

pub(crate) fn print_schedule(rows: &[ScheduleRow]) {
    if rows.is_empty() {
        println!("Waiting list is empty");
        return;
    }
    for row in rows {
        println!("{}  {:<28} {}", row.interval, row.name, row.phone_number);
    }
}
