//! Terminal rendering of the room board and reservation list

use colored::Colorize;
use uuid::Uuid;

use frontdesk::{Reservation, Room, RoomStatus};

use crate::desk::Desk;

pub fn print_rooms(rooms: &[Room]) {
    if rooms.is_empty() {
        println!("No rooms registered.");
        println!("\n{}", "Add one with:".dimmed());
        println!("  frontdesk rooms add <ID> --type single");
        return;
    }

    println!("{}", "Rooms:".bold());
    for room in rooms {
        println!(
            "  Room {}: {} {}",
            room.id.to_string().cyan(),
            status_label(room.status),
            format!("({})", room.room_type).dimmed()
        );
    }
}

pub fn print_reservations(desk: &Desk) {
    let reservations = desk.list();
    if reservations.is_empty() {
        println!("No reservations available.");
        return;
    }

    println!("{}", "Reservations:".bold());
    for (row, reservation) in reservations.iter().enumerate() {
        println!(
            "  {}. {} {}",
            row + 1,
            reservation_line(desk, reservation),
            format!("[{}]", short_id(reservation.id)).dimmed()
        );
    }
}

/// Both panels, as shown after every change
pub fn print_board(desk: &Desk) {
    print_rooms(desk.registry().list());
    println!();
    print_reservations(desk);

    let orphans = desk.orphans().count();
    if orphans > 0 {
        println!(
            "\n{} {} reservation(s) reference rooms that are not registered",
            "!".yellow(),
            orphans
        );
    }
}

pub fn reservation_line(desk: &Desk, reservation: &Reservation) -> String {
    reservation.display_line(desk.registry().lookup(reservation.room_id))
}

fn status_label(status: RoomStatus) -> colored::ColoredString {
    match status {
        RoomStatus::Free => status.to_string().green(),
        RoomStatus::Occupied => status.to_string().red(),
    }
}

/// First block of a reservation id, enough to tell rows apart
pub fn short_id(id: Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
