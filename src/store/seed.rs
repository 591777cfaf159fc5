//! Bundled demo dataset.
//!
//! One consistent marketplace snapshot: ten pros (one per trade), eighteen
//! jobs across every lifecycle status, and the bookings, reviews and payout
//! records that hang off them. All cross-references resolve and every fee
//! is exactly 15% of its amount, so [`MarketplaceData::seeded`] always
//! validates.
//!
//! [`MarketplaceData::seeded`]: super::MarketplaceData::seeded

use crate::entities::booking::{Booking, BookingStatus};
use crate::entities::earning::{EarningRecord, PayoutStatus};
use crate::entities::job::{Job, JobStatus, TradeCategory, UrgencyLevel};
use crate::entities::pro::{Pro, ProStatus};
use crate::entities::review::Review;

fn s(value: &str) -> String {
    value.to_string()
}

pub fn pros() -> Vec<Pro> {
    vec![
        Pro {
            id: s("PRO-101"),
            name: s("Marcus Reed"),
            business_name: s("Apex Plumbing & Drain LLC"),
            trade: TradeCategory::Plumbing,
            status: ProStatus::Active,
            rating: 4.9,
            review_count: 112,
            jobs_completed: 168,
            hourly_rate: 95.0,
            service_area: s("Austin Metro — 15mi radius"),
            response_time: s("45 min avg"),
            licensed: true,
            insured: true,
            background_check: true,
            joined_date: s("2023-04-18"),
            avatar_initials: s("MR"),
            completion_rate: 98.0,
        },
        Pro {
            id: s("PRO-102"),
            name: s("Elena Vasquez"),
            business_name: s("Vasquez Electric Co."),
            trade: TradeCategory::Electrical,
            status: ProStatus::Active,
            rating: 4.8,
            review_count: 96,
            jobs_completed: 140,
            hourly_rate: 110.0,
            service_area: s("North Austin & Round Rock"),
            response_time: s("1 hr avg"),
            licensed: true,
            insured: true,
            background_check: true,
            joined_date: s("2022-11-02"),
            avatar_initials: s("EV"),
            completion_rate: 97.0,
        },
        Pro {
            id: s("PRO-103"),
            name: s("Darnell Hayes"),
            business_name: s("CoolFlow HVAC Services"),
            trade: TradeCategory::Hvac,
            status: ProStatus::Active,
            rating: 4.7,
            review_count: 74,
            jobs_completed: 121,
            hourly_rate: 120.0,
            service_area: s("Greater Austin"),
            response_time: s("2 hr avg"),
            licensed: true,
            insured: true,
            background_check: true,
            joined_date: s("2023-01-26"),
            avatar_initials: s("DH"),
            completion_rate: 94.0,
        },
        Pro {
            id: s("PRO-104"),
            name: s("Sofia Marchetti"),
            business_name: s("Marchetti Moving Crew"),
            trade: TradeCategory::Moving,
            status: ProStatus::Active,
            rating: 4.6,
            review_count: 58,
            jobs_completed: 89,
            hourly_rate: 85.0,
            service_area: s("Austin & San Marcos"),
            response_time: s("3 hr avg"),
            licensed: true,
            insured: true,
            background_check: true,
            joined_date: s("2023-08-09"),
            avatar_initials: s("SM"),
            completion_rate: 92.0,
        },
        Pro {
            id: s("PRO-105"),
            name: s("Jae-won Park"),
            business_name: s("FreshCoat Painting"),
            trade: TradeCategory::Painting,
            status: ProStatus::PendingVerification,
            rating: 0.0,
            review_count: 0,
            jobs_completed: 0,
            hourly_rate: 65.0,
            service_area: s("South Austin"),
            response_time: s("4 hr avg"),
            licensed: true,
            insured: true,
            background_check: false,
            joined_date: s("2026-01-21"),
            avatar_initials: s("JP"),
            completion_rate: 0.0,
        },
        Pro {
            id: s("PRO-106"),
            name: s("Priya Raman"),
            business_name: s("GreenScape Lawn & Garden"),
            trade: TradeCategory::Landscaping,
            status: ProStatus::Active,
            rating: 4.5,
            review_count: 41,
            jobs_completed: 77,
            hourly_rate: 60.0,
            service_area: s("West Lake Hills"),
            response_time: s("1 hr avg"),
            licensed: true,
            insured: true,
            background_check: true,
            joined_date: s("2024-03-12"),
            avatar_initials: s("PR"),
            completion_rate: 90.0,
        },
        Pro {
            id: s("PRO-107"),
            name: s("Tomás Alvarez"),
            business_name: s("SparkleHome Cleaning"),
            trade: TradeCategory::Cleaning,
            status: ProStatus::Active,
            rating: 4.9,
            review_count: 133,
            jobs_completed: 210,
            hourly_rate: 50.0,
            service_area: s("Austin Metro"),
            response_time: s("30 min avg"),
            licensed: false,
            insured: true,
            background_check: true,
            joined_date: s("2022-06-30"),
            avatar_initials: s("TA"),
            completion_rate: 99.0,
        },
        Pro {
            id: s("PRO-108"),
            name: s("Gary Mitchell"),
            business_name: s("Mitchell Handy Services"),
            trade: TradeCategory::Handyman,
            status: ProStatus::Suspended,
            rating: 3.8,
            review_count: 27,
            jobs_completed: 45,
            hourly_rate: 70.0,
            service_area: s("East Austin"),
            response_time: s("5 hr avg"),
            licensed: true,
            insured: false,
            background_check: true,
            joined_date: s("2023-10-05"),
            avatar_initials: s("GM"),
            completion_rate: 81.0,
        },
        Pro {
            id: s("PRO-109"),
            name: s("Linda Okafor"),
            business_name: s("SummitLine Roofing"),
            trade: TradeCategory::Roofing,
            status: ProStatus::LicenseExpired,
            rating: 4.4,
            review_count: 52,
            jobs_completed: 66,
            hourly_rate: 105.0,
            service_area: s("Austin & Pflugerville"),
            response_time: s("2 hr avg"),
            licensed: true,
            insured: true,
            background_check: true,
            joined_date: s("2021-09-14"),
            avatar_initials: s("LO"),
            completion_rate: 93.0,
        },
        Pro {
            id: s("PRO-110"),
            name: s("Caleb Ford"),
            business_name: s("Ford Finish Carpentry"),
            trade: TradeCategory::Carpentry,
            status: ProStatus::BackgroundCheckFailed,
            rating: 0.0,
            review_count: 0,
            jobs_completed: 0,
            hourly_rate: 88.0,
            service_area: s("Cedar Park"),
            response_time: s("6 hr avg"),
            licensed: true,
            insured: true,
            background_check: false,
            joined_date: s("2026-02-02"),
            avatar_initials: s("CF"),
            completion_rate: 0.0,
        },
    ]
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: s("JOB-1001"),
            title: s("Drain Cleaning — Kitchen Sink"),
            category: TradeCategory::Plumbing,
            status: JobStatus::Completed,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Dana Whitfield"),
            homeowner_location: s("Austin, TX"),
            pro: Some(s("Marcus Reed")),
            pro_id: Some(s("PRO-101")),
            amount: 180.0,
            created_at: s("2026-01-12"),
            scheduled_date: Some(s("2026-01-14")),
            completed_date: Some(s("2026-01-14")),
            description: s("Kitchen sink draining slowly for a week; likely grease buildup."),
            status_note: None,
        },
        Job {
            id: s("JOB-1002"),
            title: s("Panel Upgrade to 200A"),
            category: TradeCategory::Electrical,
            status: JobStatus::Completed,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Victor Nguyen"),
            homeowner_location: s("Round Rock, TX"),
            pro: Some(s("Elena Vasquez")),
            pro_id: Some(s("PRO-102")),
            amount: 2400.0,
            created_at: s("2026-01-08"),
            scheduled_date: Some(s("2026-01-19")),
            completed_date: Some(s("2026-01-20")),
            description: s("Replace 100A panel with 200A service; city permit required."),
            status_note: None,
        },
        Job {
            id: s("JOB-1003"),
            title: s("AC Not Cooling — Upstairs Zone"),
            category: TradeCategory::Hvac,
            status: JobStatus::InProgress,
            urgency: UrgencyLevel::Emergency,
            homeowner: s("Rachel Kim"),
            homeowner_location: s("Austin, TX"),
            pro: Some(s("Darnell Hayes")),
            pro_id: Some(s("PRO-103")),
            amount: 920.0,
            created_at: s("2026-02-10"),
            scheduled_date: Some(s("2026-02-11")),
            completed_date: None,
            description: s("Upstairs zone blowing warm air; suspected compressor issue."),
            status_note: None,
        },
        Job {
            id: s("JOB-1004"),
            title: s("Two-Bedroom Apartment Move"),
            category: TradeCategory::Moving,
            status: JobStatus::Confirmed,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Owen Castillo"),
            homeowner_location: s("San Marcos, TX"),
            pro: Some(s("Sofia Marchetti")),
            pro_id: Some(s("PRO-104")),
            amount: 680.0,
            created_at: s("2026-02-05"),
            scheduled_date: Some(s("2026-02-21")),
            completed_date: None,
            description: s("Third-floor walkup to ground-floor unit, two miles away."),
            status_note: None,
        },
        Job {
            id: s("JOB-1005"),
            title: s("Exterior Trim Repaint"),
            category: TradeCategory::Painting,
            status: JobStatus::Quoted,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Maggie Sun"),
            homeowner_location: s("Austin, TX"),
            pro: None,
            pro_id: None,
            amount: 0.0,
            created_at: s("2026-02-12"),
            scheduled_date: None,
            completed_date: None,
            description: s("Fascia and window trim peeling on the south side."),
            status_note: None,
        },
        Job {
            id: s("JOB-1006"),
            title: s("Backyard Sod Replacement"),
            category: TradeCategory::Landscaping,
            status: JobStatus::Requested,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Hank Dillard"),
            homeowner_location: s("West Lake Hills, TX"),
            pro: None,
            pro_id: None,
            amount: 0.0,
            created_at: s("2026-02-14"),
            scheduled_date: None,
            completed_date: None,
            description: s("Roughly 800 sq ft of dead grass to replace with St. Augustine."),
            status_note: None,
        },
        Job {
            id: s("JOB-1007"),
            title: s("Move-Out Deep Clean"),
            category: TradeCategory::Cleaning,
            status: JobStatus::Completed,
            urgency: UrgencyLevel::SameDay,
            homeowner: s("Alicia Grant"),
            homeowner_location: s("Austin, TX"),
            pro: Some(s("Tomás Alvarez")),
            pro_id: Some(s("PRO-107")),
            amount: 260.0,
            created_at: s("2026-01-25"),
            scheduled_date: Some(s("2026-01-25")),
            completed_date: Some(s("2026-01-25")),
            description: s("Landlord walkthrough tomorrow morning; full apartment clean."),
            status_note: None,
        },
        Job {
            id: s("JOB-1008"),
            title: s("Mount TV and Assemble Shelving"),
            category: TradeCategory::Handyman,
            status: JobStatus::Cancelled,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Bree Thompson"),
            homeowner_location: s("Austin, TX"),
            pro: Some(s("Gary Mitchell")),
            pro_id: Some(s("PRO-108")),
            amount: 140.0,
            created_at: s("2026-01-18"),
            scheduled_date: Some(s("2026-01-22")),
            completed_date: None,
            description: s("65-inch TV over fireplace plus two IKEA shelf units."),
            status_note: Some(s("Homeowner cancelled the day before due to a schedule conflict.")),
        },
        Job {
            id: s("JOB-1009"),
            title: s("Roof Leak Repair — Flashing"),
            category: TradeCategory::Roofing,
            status: JobStatus::Disputed,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Sam Porter"),
            homeowner_location: s("Pflugerville, TX"),
            pro: Some(s("Linda Okafor")),
            pro_id: Some(s("PRO-109")),
            amount: 850.0,
            created_at: s("2026-01-05"),
            scheduled_date: Some(s("2026-01-09")),
            completed_date: Some(s("2026-01-10")),
            description: s("Water stain spreading on the bedroom ceiling after storms."),
            status_note: Some(s("Homeowner reports the leak returned after the first rain.")),
        },
        Job {
            id: s("JOB-1010"),
            title: s("Water Heater Replacement"),
            category: TradeCategory::Plumbing,
            status: JobStatus::Completed,
            urgency: UrgencyLevel::Emergency,
            homeowner: s("Nina Alvarado"),
            homeowner_location: s("Austin, TX"),
            pro: Some(s("Marcus Reed")),
            pro_id: Some(s("PRO-101")),
            amount: 1900.0,
            created_at: s("2026-01-28"),
            scheduled_date: Some(s("2026-01-28")),
            completed_date: Some(s("2026-01-29")),
            description: s("Tank failed and flooded the garage; same-evening replacement."),
            status_note: None,
        },
        Job {
            id: s("JOB-1011"),
            title: s("Ceiling Fan Install (3 Rooms)"),
            category: TradeCategory::Electrical,
            status: JobStatus::Confirmed,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Greg Olsen"),
            homeowner_location: s("Round Rock, TX"),
            pro: Some(s("Elena Vasquez")),
            pro_id: Some(s("PRO-102")),
            amount: 420.0,
            created_at: s("2026-02-09"),
            scheduled_date: Some(s("2026-02-20")),
            completed_date: None,
            description: s("Replace three builder-grade fans; boxes already fan-rated."),
            status_note: None,
        },
        Job {
            id: s("JOB-1012"),
            title: s("Furnace Tune-Up"),
            category: TradeCategory::Hvac,
            status: JobStatus::NoShow,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Paula Reyes"),
            homeowner_location: s("Austin, TX"),
            pro: Some(s("Darnell Hayes")),
            pro_id: Some(s("PRO-103")),
            amount: 150.0,
            created_at: s("2026-01-15"),
            scheduled_date: Some(s("2026-01-21")),
            completed_date: None,
            description: s("Annual maintenance before the cold snap."),
            status_note: Some(s("Pro missed the confirmed window; rebooking offered.")),
        },
        Job {
            id: s("JOB-1013"),
            title: s("Garage Shelving Build"),
            category: TradeCategory::Carpentry,
            status: JobStatus::Requested,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Theo Brandt"),
            homeowner_location: s("Cedar Park, TX"),
            pro: None,
            pro_id: None,
            amount: 0.0,
            created_at: s("2026-02-15"),
            scheduled_date: None,
            completed_date: None,
            description: s("Custom floor-to-ceiling shelving along one garage wall."),
            status_note: None,
        },
        Job {
            id: s("JOB-1014"),
            title: s("Gutter Cleaning and Minor Repair"),
            category: TradeCategory::Roofing,
            status: JobStatus::Completed,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Ivy Lawson"),
            homeowner_location: s("Austin, TX"),
            pro: Some(s("Linda Okafor")),
            pro_id: Some(s("PRO-109")),
            amount: 320.0,
            created_at: s("2026-01-11"),
            scheduled_date: Some(s("2026-01-16")),
            completed_date: Some(s("2026-01-16")),
            description: s("Full gutter clean plus re-seating two loose downspouts."),
            status_note: None,
        },
        Job {
            id: s("JOB-1015"),
            title: s("Weekly Lawn Service — February"),
            category: TradeCategory::Landscaping,
            status: JobStatus::InProgress,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Hank Dillard"),
            homeowner_location: s("West Lake Hills, TX"),
            pro: Some(s("Priya Raman")),
            pro_id: Some(s("PRO-106")),
            amount: 240.0,
            created_at: s("2026-02-01"),
            scheduled_date: Some(s("2026-02-03")),
            completed_date: None,
            description: s("Four weekly visits: mow, edge, and bed weeding."),
            status_note: None,
        },
        Job {
            id: s("JOB-1016"),
            title: s("Burst Pipe — Laundry Room"),
            category: TradeCategory::Plumbing,
            status: JobStatus::Completed,
            urgency: UrgencyLevel::Emergency,
            homeowner: s("Carl Jensen"),
            homeowner_location: s("Austin, TX"),
            pro: Some(s("Marcus Reed")),
            pro_id: Some(s("PRO-101")),
            amount: 1460.0,
            created_at: s("2026-02-02"),
            scheduled_date: Some(s("2026-02-02")),
            completed_date: Some(s("2026-02-03")),
            description: s("Supply line burst behind the washer; water shut off at main."),
            status_note: None,
        },
        Job {
            id: s("JOB-1017"),
            title: s("Whole-House Repaint Quote"),
            category: TradeCategory::Painting,
            status: JobStatus::Quoted,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Maggie Sun"),
            homeowner_location: s("Austin, TX"),
            pro: None,
            pro_id: None,
            amount: 0.0,
            created_at: s("2026-02-08"),
            scheduled_date: None,
            completed_date: None,
            description: s("Interior repaint, three bedrooms and open living area."),
            status_note: None,
        },
        Job {
            id: s("JOB-1018"),
            title: s("Post-Renovation Clean"),
            category: TradeCategory::Cleaning,
            status: JobStatus::Confirmed,
            urgency: UrgencyLevel::Standard,
            homeowner: s("Derek Mills"),
            homeowner_location: s("Austin, TX"),
            pro: Some(s("Tomás Alvarez")),
            pro_id: Some(s("PRO-107")),
            amount: 380.0,
            created_at: s("2026-02-13"),
            scheduled_date: Some(s("2026-02-24")),
            completed_date: None,
            description: s("Dust removal after a kitchen remodel, including inside cabinets."),
            status_note: None,
        },
    ]
}

pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: s("BKG-501"),
            job_id: s("JOB-1001"),
            pro_id: s("PRO-101"),
            pro_name: s("Marcus Reed"),
            homeowner: s("Dana Whitfield"),
            category: TradeCategory::Plumbing,
            service: s("Drain Cleaning"),
            status: BookingStatus::Completed,
            amount: 180.0,
            platform_fee: 27.0,
            scheduled_date: s("2026-01-14"),
            completed_date: Some(s("2026-01-14")),
        },
        Booking {
            id: s("BKG-502"),
            job_id: s("JOB-1002"),
            pro_id: s("PRO-102"),
            pro_name: s("Elena Vasquez"),
            homeowner: s("Victor Nguyen"),
            category: TradeCategory::Electrical,
            service: s("Panel Upgrade"),
            status: BookingStatus::Completed,
            amount: 2400.0,
            platform_fee: 360.0,
            scheduled_date: s("2026-01-19"),
            completed_date: Some(s("2026-01-20")),
        },
        Booking {
            id: s("BKG-503"),
            job_id: s("JOB-1003"),
            pro_id: s("PRO-103"),
            pro_name: s("Darnell Hayes"),
            homeowner: s("Rachel Kim"),
            category: TradeCategory::Hvac,
            service: s("AC Repair"),
            status: BookingStatus::InProgress,
            amount: 920.0,
            platform_fee: 138.0,
            scheduled_date: s("2026-02-11"),
            completed_date: None,
        },
        Booking {
            id: s("BKG-504"),
            job_id: s("JOB-1004"),
            pro_id: s("PRO-104"),
            pro_name: s("Sofia Marchetti"),
            homeowner: s("Owen Castillo"),
            category: TradeCategory::Moving,
            service: s("Apartment Move"),
            status: BookingStatus::Confirmed,
            amount: 680.0,
            platform_fee: 102.0,
            scheduled_date: s("2026-02-21"),
            completed_date: None,
        },
        Booking {
            id: s("BKG-505"),
            job_id: s("JOB-1007"),
            pro_id: s("PRO-107"),
            pro_name: s("Tomás Alvarez"),
            homeowner: s("Alicia Grant"),
            category: TradeCategory::Cleaning,
            service: s("Move-Out Deep Clean"),
            status: BookingStatus::Completed,
            amount: 260.0,
            platform_fee: 39.0,
            scheduled_date: s("2026-01-25"),
            completed_date: Some(s("2026-01-25")),
        },
        Booking {
            id: s("BKG-506"),
            job_id: s("JOB-1008"),
            pro_id: s("PRO-108"),
            pro_name: s("Gary Mitchell"),
            homeowner: s("Bree Thompson"),
            category: TradeCategory::Handyman,
            service: s("TV Mount and Shelving"),
            status: BookingStatus::Cancelled,
            amount: 140.0,
            platform_fee: 21.0,
            scheduled_date: s("2026-01-22"),
            completed_date: None,
        },
        Booking {
            id: s("BKG-507"),
            job_id: s("JOB-1009"),
            pro_id: s("PRO-109"),
            pro_name: s("Linda Okafor"),
            homeowner: s("Sam Porter"),
            category: TradeCategory::Roofing,
            service: s("Roof Leak Repair"),
            status: BookingStatus::Completed,
            amount: 850.0,
            platform_fee: 127.5,
            scheduled_date: s("2026-01-09"),
            completed_date: Some(s("2026-01-10")),
        },
        Booking {
            id: s("BKG-508"),
            job_id: s("JOB-1010"),
            pro_id: s("PRO-101"),
            pro_name: s("Marcus Reed"),
            homeowner: s("Nina Alvarado"),
            category: TradeCategory::Plumbing,
            service: s("Water Heater Replacement"),
            status: BookingStatus::Completed,
            amount: 1900.0,
            platform_fee: 285.0,
            scheduled_date: s("2026-01-28"),
            completed_date: Some(s("2026-01-29")),
        },
        Booking {
            id: s("BKG-509"),
            job_id: s("JOB-1011"),
            pro_id: s("PRO-102"),
            pro_name: s("Elena Vasquez"),
            homeowner: s("Greg Olsen"),
            category: TradeCategory::Electrical,
            service: s("Ceiling Fan Install"),
            status: BookingStatus::Confirmed,
            amount: 420.0,
            platform_fee: 63.0,
            scheduled_date: s("2026-02-20"),
            completed_date: None,
        },
        Booking {
            id: s("BKG-510"),
            job_id: s("JOB-1012"),
            pro_id: s("PRO-103"),
            pro_name: s("Darnell Hayes"),
            homeowner: s("Paula Reyes"),
            category: TradeCategory::Hvac,
            service: s("Furnace Tune-Up"),
            status: BookingStatus::Cancelled,
            amount: 150.0,
            platform_fee: 22.5,
            scheduled_date: s("2026-01-21"),
            completed_date: None,
        },
        Booking {
            id: s("BKG-511"),
            job_id: s("JOB-1014"),
            pro_id: s("PRO-109"),
            pro_name: s("Linda Okafor"),
            homeowner: s("Ivy Lawson"),
            category: TradeCategory::Roofing,
            service: s("Gutter Cleaning"),
            status: BookingStatus::Completed,
            amount: 320.0,
            platform_fee: 48.0,
            scheduled_date: s("2026-01-16"),
            completed_date: Some(s("2026-01-16")),
        },
        Booking {
            id: s("BKG-512"),
            job_id: s("JOB-1015"),
            pro_id: s("PRO-106"),
            pro_name: s("Priya Raman"),
            homeowner: s("Hank Dillard"),
            category: TradeCategory::Landscaping,
            service: s("Weekly Lawn Service"),
            status: BookingStatus::InProgress,
            amount: 240.0,
            platform_fee: 36.0,
            scheduled_date: s("2026-02-03"),
            completed_date: None,
        },
        Booking {
            id: s("BKG-513"),
            job_id: s("JOB-1016"),
            pro_id: s("PRO-101"),
            pro_name: s("Marcus Reed"),
            homeowner: s("Carl Jensen"),
            category: TradeCategory::Plumbing,
            service: s("Burst Pipe Repair"),
            status: BookingStatus::Completed,
            amount: 1460.0,
            platform_fee: 219.0,
            scheduled_date: s("2026-02-02"),
            completed_date: Some(s("2026-02-03")),
        },
        Booking {
            id: s("BKG-514"),
            job_id: s("JOB-1018"),
            pro_id: s("PRO-107"),
            pro_name: s("Tomás Alvarez"),
            homeowner: s("Derek Mills"),
            category: TradeCategory::Cleaning,
            service: s("Post-Renovation Clean"),
            status: BookingStatus::Confirmed,
            amount: 380.0,
            platform_fee: 57.0,
            scheduled_date: s("2026-02-24"),
            completed_date: None,
        },
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: s("REV-301"),
            job_id: s("JOB-1001"),
            pro_name: s("Marcus Reed"),
            pro_id: s("PRO-101"),
            homeowner: s("Dana Whitfield"),
            category: TradeCategory::Plumbing,
            rating: 5,
            comment: s("Fast, clean, explained everything before starting."),
            date: s("2026-01-15"),
            service: s("Drain Cleaning"),
        },
        Review {
            id: s("REV-302"),
            job_id: s("JOB-1002"),
            pro_name: s("Elena Vasquez"),
            pro_id: s("PRO-102"),
            homeowner: s("Victor Nguyen"),
            category: TradeCategory::Electrical,
            rating: 5,
            comment: s("Permit handled end to end and the inspection passed first try."),
            date: s("2026-01-22"),
            service: s("Panel Upgrade"),
        },
        Review {
            id: s("REV-303"),
            job_id: s("JOB-1007"),
            pro_name: s("Tomás Alvarez"),
            pro_id: s("PRO-107"),
            homeowner: s("Alicia Grant"),
            category: TradeCategory::Cleaning,
            rating: 4,
            comment: s("Great job overall, though the crew arrived a bit late."),
            date: s("2026-01-26"),
            service: s("Move-Out Deep Clean"),
        },
        Review {
            id: s("REV-304"),
            job_id: s("JOB-1009"),
            pro_name: s("Linda Okafor"),
            pro_id: s("PRO-109"),
            homeowner: s("Sam Porter"),
            category: TradeCategory::Roofing,
            rating: 2,
            comment: s("Leak came back after the first rain. Waiting on a fix."),
            date: s("2026-01-18"),
            service: s("Roof Leak Repair"),
        },
        Review {
            id: s("REV-305"),
            job_id: s("JOB-1010"),
            pro_name: s("Marcus Reed"),
            pro_id: s("PRO-101"),
            homeowner: s("Nina Alvarado"),
            category: TradeCategory::Plumbing,
            rating: 5,
            comment: s("Emergency call handled the same evening. Lifesaver."),
            date: s("2026-01-30"),
            service: s("Water Heater Replacement"),
        },
        Review {
            id: s("REV-306"),
            job_id: s("JOB-1014"),
            pro_name: s("Linda Okafor"),
            pro_id: s("PRO-109"),
            homeowner: s("Ivy Lawson"),
            category: TradeCategory::Roofing,
            rating: 4,
            comment: s("Gutters look brand new. Left a small mess by the shed."),
            date: s("2026-01-17"),
            service: s("Gutter Cleaning"),
        },
        Review {
            id: s("REV-307"),
            job_id: s("JOB-1016"),
            pro_name: s("Marcus Reed"),
            pro_id: s("PRO-101"),
            homeowner: s("Carl Jensen"),
            category: TradeCategory::Plumbing,
            rating: 5,
            comment: s("Burst pipe fixed in under two hours, start to finish."),
            date: s("2026-02-04"),
            service: s("Burst Pipe Repair"),
        },
    ]
}

pub fn earning_records() -> Vec<EarningRecord> {
    vec![
        EarningRecord {
            id: s("ERN-701"),
            pro_id: s("PRO-101"),
            pro_name: s("Marcus Reed"),
            category: TradeCategory::Plumbing,
            period: s("Jan 2026"),
            jobs_completed: 14,
            gross_earnings: 6840.0,
            platform_fee: 1026.0,
            net_earnings: 5814.0,
            payout_status: PayoutStatus::Paid,
            payout_date: Some(s("2026-02-01")),
        },
        EarningRecord {
            id: s("ERN-702"),
            pro_id: s("PRO-102"),
            pro_name: s("Elena Vasquez"),
            category: TradeCategory::Electrical,
            period: s("Jan 2026"),
            jobs_completed: 9,
            gross_earnings: 8120.0,
            platform_fee: 1218.0,
            net_earnings: 6902.0,
            payout_status: PayoutStatus::Paid,
            payout_date: Some(s("2026-02-01")),
        },
        EarningRecord {
            id: s("ERN-703"),
            pro_id: s("PRO-103"),
            pro_name: s("Darnell Hayes"),
            category: TradeCategory::Hvac,
            period: s("Jan 2026"),
            jobs_completed: 11,
            gross_earnings: 7430.0,
            platform_fee: 1114.5,
            net_earnings: 6315.5,
            payout_status: PayoutStatus::Paid,
            payout_date: Some(s("2026-02-01")),
        },
        EarningRecord {
            id: s("ERN-704"),
            pro_id: s("PRO-107"),
            pro_name: s("Tomás Alvarez"),
            category: TradeCategory::Cleaning,
            period: s("Jan 2026"),
            jobs_completed: 22,
            gross_earnings: 5280.0,
            platform_fee: 792.0,
            net_earnings: 4488.0,
            payout_status: PayoutStatus::Paid,
            payout_date: Some(s("2026-02-01")),
        },
        EarningRecord {
            id: s("ERN-705"),
            pro_id: s("PRO-109"),
            pro_name: s("Linda Okafor"),
            category: TradeCategory::Roofing,
            period: s("Jan 2026"),
            jobs_completed: 6,
            gross_earnings: 4980.0,
            platform_fee: 747.0,
            net_earnings: 4233.0,
            payout_status: PayoutStatus::Processing,
            payout_date: None,
        },
        EarningRecord {
            id: s("ERN-706"),
            pro_id: s("PRO-106"),
            pro_name: s("Priya Raman"),
            category: TradeCategory::Landscaping,
            period: s("Jan 2026"),
            jobs_completed: 12,
            gross_earnings: 3120.0,
            platform_fee: 468.0,
            net_earnings: 2652.0,
            payout_status: PayoutStatus::Paid,
            payout_date: Some(s("2026-02-01")),
        },
        EarningRecord {
            id: s("ERN-707"),
            pro_id: s("PRO-101"),
            pro_name: s("Marcus Reed"),
            category: TradeCategory::Plumbing,
            period: s("Feb 2026"),
            jobs_completed: 8,
            gross_earnings: 4630.0,
            platform_fee: 694.5,
            net_earnings: 3935.5,
            payout_status: PayoutStatus::Scheduled,
            payout_date: None,
        },
        EarningRecord {
            id: s("ERN-708"),
            pro_id: s("PRO-102"),
            pro_name: s("Elena Vasquez"),
            category: TradeCategory::Electrical,
            period: s("Feb 2026"),
            jobs_completed: 5,
            gross_earnings: 3890.0,
            platform_fee: 583.5,
            net_earnings: 3306.5,
            payout_status: PayoutStatus::InstantPay,
            payout_date: Some(s("2026-02-16")),
        },
        EarningRecord {
            id: s("ERN-709"),
            pro_id: s("PRO-104"),
            pro_name: s("Sofia Marchetti"),
            category: TradeCategory::Moving,
            period: s("Feb 2026"),
            jobs_completed: 7,
            gross_earnings: 4760.0,
            platform_fee: 714.0,
            net_earnings: 4046.0,
            payout_status: PayoutStatus::Scheduled,
            payout_date: None,
        },
        EarningRecord {
            id: s("ERN-710"),
            pro_id: s("PRO-108"),
            pro_name: s("Gary Mitchell"),
            category: TradeCategory::Handyman,
            period: s("Jan 2026"),
            jobs_completed: 4,
            gross_earnings: 980.0,
            platform_fee: 147.0,
            net_earnings: 833.0,
            payout_status: PayoutStatus::Paid,
            payout_date: Some(s("2026-02-01")),
        },
    ]
}
