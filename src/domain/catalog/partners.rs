//! Transfer-partner table: which bank currencies can move into which airline
//! loyalty programs. The transfer graph is built from this once at startup.

use crate::domain::values::currency::Currency;
use crate::domain::values::currency::Currency::{Bilt, Cap1, Chase, Citi, Mr, Wf};

#[derive(Debug, Clone, Copy)]
pub struct PartnerProgram {
    pub program: &'static str,
    /// Airline(s) the program books, matched case-insensitively by substring.
    pub airline: &'static str,
    pub alliance: &'static str,
    pub transferable_from: &'static [Currency],
}

pub const PARTNER_PROGRAMS: &[PartnerProgram] = &[
    PartnerProgram { program: "Aeromexico Rewards", airline: "Aeromexico", alliance: "SkyTeam", transferable_from: &[Mr, Cap1, Citi] },
    PartnerProgram { program: "Air Canada Aeroplan", airline: "Air Canada", alliance: "Star Alliance", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt] },
    PartnerProgram { program: "Flying Blue", airline: "Air France/KLM", alliance: "SkyTeam", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt, Wf] },
    PartnerProgram { program: "Alaska Mileage Plan", airline: "Alaska", alliance: "Oneworld", transferable_from: &[Bilt] },
    PartnerProgram { program: "American AAdvantage", airline: "American", alliance: "Oneworld", transferable_from: &[Bilt, Wf] },
    PartnerProgram { program: "Avianca LifeMiles", airline: "Avianca", alliance: "Star Alliance", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt] },
    PartnerProgram { program: "British Airways Avios", airline: "British Airways", alliance: "Oneworld", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt, Wf] },
    PartnerProgram { program: "Cathay Pacific Asia Miles", airline: "Cathay Pacific", alliance: "Oneworld", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt] },
    PartnerProgram { program: "Copa ConnectMiles", airline: "Copa", alliance: "Star Alliance", transferable_from: &[Cap1, Citi] },
    PartnerProgram { program: "Delta SkyMiles", airline: "Delta", alliance: "SkyTeam", transferable_from: &[Mr] },
    PartnerProgram { program: "Emirates Skywards", airline: "Emirates", alliance: "None", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt, Wf] },
    PartnerProgram { program: "Etihad Guest", airline: "Etihad", alliance: "None", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt] },
    PartnerProgram { program: "Finnair Plus", airline: "Finnair", alliance: "Oneworld", transferable_from: &[Cap1] },
    PartnerProgram { program: "Iberia Avios", airline: "Iberia", alliance: "Oneworld", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt, Wf] },
    PartnerProgram { program: "JetBlue TrueBlue", airline: "JetBlue", alliance: "None", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt, Wf] },
    PartnerProgram { program: "Lufthansa Miles & More", airline: "Lufthansa", alliance: "Star Alliance", transferable_from: &[Bilt] },
    PartnerProgram { program: "Qantas Frequent Flyer", airline: "Qantas", alliance: "Oneworld", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt, Wf] },
    PartnerProgram { program: "Qatar Airways Avios", airline: "Qatar", alliance: "Oneworld", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt, Wf] },
    PartnerProgram { program: "SAS EuroBonus", airline: "SAS", alliance: "Star Alliance", transferable_from: &[Mr, Cap1, Citi] },
    PartnerProgram { program: "Singapore KrisFlyer", airline: "Singapore Airlines", alliance: "Star Alliance", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt, Wf] },
    PartnerProgram { program: "Turkish Miles&Smiles", airline: "Turkish Airlines", alliance: "Star Alliance", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt] },
    PartnerProgram { program: "United MileagePlus", airline: "United", alliance: "Star Alliance", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt] },
    PartnerProgram { program: "Virgin Atlantic Flying Club", airline: "Virgin Atlantic", alliance: "None", transferable_from: &[Mr, Chase, Cap1, Citi, Bilt, Wf] },
    PartnerProgram { program: "Virgin Australia Velocity", airline: "Virgin Australia", alliance: "None", transferable_from: &[Mr, Cap1, Citi] },
];

/// Transfer time when no override is known (minutes).
pub const DEFAULT_TRANSFER_MINUTES: u32 = 1440;

/// Known instant or multi-day transfers (minutes).
pub const TRANSFER_TIME_OVERRIDES: &[(Currency, &str, u32)] = &[
    (Mr, "Singapore KrisFlyer", 2880),
    (Mr, "ANA Mileage Club", 4320),
    (Cap1, "Singapore KrisFlyer", 2880),
    (Mr, "Avianca LifeMiles", 0),
    (Cap1, "Avianca LifeMiles", 0),
    (Mr, "Flying Blue", 0),
    (Mr, "British Airways Avios", 0),
    (Mr, "Virgin Atlantic Flying Club", 0),
    (Mr, "Delta SkyMiles", 0),
    (Cap1, "Air Canada Aeroplan", 0),
    (Cap1, "Turkish Miles&Smiles", 0),
    (Cap1, "British Airways Avios", 0),
    (Bilt, "Air Canada Aeroplan", 0),
    (Bilt, "Flying Blue", 0),
    (Bilt, "British Airways Avios", 0),
    (Bilt, "American AAdvantage", 0),
    (Bilt, "United MileagePlus", 0),
    (Citi, "Flying Blue", 0),
    (Citi, "Turkish Miles&Smiles", 0),
    (Citi, "Avianca LifeMiles", 0),
    (Wf, "Flying Blue", 0),
    (Wf, "British Airways Avios", 0),
];

pub fn transfer_minutes(currency: Currency, program: &str) -> u32 {
    TRANSFER_TIME_OVERRIDES
        .iter()
        .find(|(c, p, _)| *c == currency && *p == program)
        .map(|(_, _, minutes)| *minutes)
        .unwrap_or(DEFAULT_TRANSFER_MINUTES)
}

/// Hotel program redeemed with `Currency::Marriott`.
pub const HOTEL_PROGRAM: &str = "Marriott Bonvoy";
