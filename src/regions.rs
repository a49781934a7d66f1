//! Static tables of the tournaments and partner teams tracked per region.
//!
//! These are reference data, not derived from scraped pages: matches are
//! joined to them by exact display-name equality, which is what the
//! `strum` serializations below render.

use strum_macros::Display;

/// Ongoing and upcoming tournaments, by their exact listing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Tournament {
    #[strum(serialize = "Valorant Masters Santiago 2026")]
    MastersSantiago2026,
}

/// Tournaments whose matches make up the combined "All VCT Matches" feed.
pub const VCT_TOURNAMENTS: &[Tournament] = &[Tournament::MastersSantiago2026];

/// Cross-region tournaments that get their own calendar outside any
/// region block.
pub const GLOBAL_TOURNAMENTS: &[Tournament] = &[Tournament::MastersSantiago2026];

/// Partnered teams, by their exact listing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Team {
    // EMEA partners
    #[strum(serialize = "BBL Esport")]
    BblEsport,
    #[strum(serialize = "FNATIC")]
    Fnatic,
    #[strum(serialize = "FUT Esports")]
    FutEsports,
    #[strum(serialize = "Gentle Mates")]
    GentleMates,
    #[strum(serialize = "GIANTX")]
    Giantx,
    #[strum(serialize = "Karmine Corp")]
    KarmineCorp,
    #[strum(serialize = "Natus Vincere")]
    NatusVincere,
    #[strum(serialize = "Team Heretics")]
    TeamHeretics,
    #[strum(serialize = "Team Liquid")]
    TeamLiquid,
    #[strum(serialize = "Team Vitality")]
    TeamVitality,
    #[strum(serialize = "ULF Esports")]
    UlfEsports,
    #[strum(serialize = "PCIFIC Esports")]
    PcificEsports,
    // Americas partners
    #[strum(serialize = "100 Thieves")]
    HundredThieves,
    #[strum(serialize = "Cloud9")]
    Cloud9,
    #[strum(serialize = "Evil Geniuses")]
    EvilGeniuses,
    #[strum(serialize = "FURIA")]
    Furia,
    #[strum(serialize = "KRÜ Esports")]
    KruEsports,
    #[strum(serialize = "LEVIATÁN")]
    Leviatan,
    #[strum(serialize = "LOUD")]
    Loud,
    #[strum(serialize = "MIBR")]
    Mibr,
    #[strum(serialize = "NRG")]
    Nrg,
    #[strum(serialize = "Sentinels")]
    Sentinels,
    #[strum(serialize = "G2 Esports")]
    G2Esports,
    #[strum(serialize = "ENVY")]
    Envy,
    // Pacific partners
    #[strum(serialize = "DetonatioN FocusMe")]
    DetonationFocusMe,
    #[strum(serialize = "DRX")]
    Drx,
    #[strum(serialize = "FULL SENSE")]
    FullSense,
    #[strum(serialize = "Gen.G")]
    GenG,
    #[strum(serialize = "Global Esports")]
    GlobalEsports,
    #[strum(serialize = "Paper Rex")]
    PaperRex,
    #[strum(serialize = "Rex Regum Qeon")]
    RexRegumQeon,
    #[strum(serialize = "T1")]
    T1,
    #[strum(serialize = "Team Secret")]
    TeamSecret,
    #[strum(serialize = "ZETA DIVISION")]
    ZetaDivision,
    #[strum(serialize = "VARREL")]
    Varrel,
    #[strum(serialize = "Nongshim RedForce")]
    NongshimRedForce,
    // China partners
    #[strum(serialize = "All Gamers")]
    AllGamers,
    #[strum(serialize = "Bilibili Gaming")]
    BilibiliGaming,
    #[strum(serialize = "EDward Gaming")]
    EdwardGaming,
    #[strum(serialize = "FunPlus Phoenix")]
    FunPlusPhoenix,
    #[strum(serialize = "JDG Esports")]
    JdgEsports,
    #[strum(serialize = "Nova Esports")]
    NovaEsports,
    #[strum(serialize = "Titan Esports Club")]
    TitanEsportsClub,
    #[strum(serialize = "Trace Esports")]
    TraceEsports,
    #[strum(serialize = "TYLOO")]
    Tyloo,
    #[strum(serialize = "Wolves Esports")]
    WolvesEsports,
    #[strum(serialize = "Xi Lai Gaming")]
    XiLaiGaming,
    #[strum(serialize = "Dragon Ranger Gaming")]
    DragonRangerGaming,
}

/// A competitive region: the tournaments and partner teams that get a
/// calendar file under its block on the index page.
#[derive(Debug, Clone)]
pub struct Region {
    pub name: &'static str,
    pub tournaments: &'static [Tournament],
    pub teams: &'static [Team],
}

const EMEA_TEAMS: &[Team] = &[
    Team::BblEsport,
    Team::Fnatic,
    Team::FutEsports,
    Team::GentleMates,
    Team::Giantx,
    Team::KarmineCorp,
    Team::NatusVincere,
    Team::TeamHeretics,
    Team::TeamLiquid,
    Team::TeamVitality,
    Team::UlfEsports,
    Team::PcificEsports,
];

const AMERICAS_TEAMS: &[Team] = &[
    Team::HundredThieves,
    Team::Cloud9,
    Team::EvilGeniuses,
    Team::Furia,
    Team::KruEsports,
    Team::Leviatan,
    Team::Loud,
    Team::Mibr,
    Team::Nrg,
    Team::Sentinels,
    Team::G2Esports,
    Team::Envy,
];

const PACIFIC_TEAMS: &[Team] = &[
    Team::DetonationFocusMe,
    Team::Drx,
    Team::FullSense,
    Team::GenG,
    Team::GlobalEsports,
    Team::PaperRex,
    Team::RexRegumQeon,
    Team::T1,
    Team::TeamSecret,
    Team::ZetaDivision,
    Team::Varrel,
    Team::NongshimRedForce,
];

const CHINA_TEAMS: &[Team] = &[
    Team::AllGamers,
    Team::BilibiliGaming,
    Team::EdwardGaming,
    Team::FunPlusPhoenix,
    Team::JdgEsports,
    Team::NovaEsports,
    Team::TitanEsportsClub,
    Team::TraceEsports,
    Team::Tyloo,
    Team::WolvesEsports,
    Team::XiLaiGaming,
    Team::DragonRangerGaming,
];

/// The four VCT regions in index-page order. Returned as values so the
/// aggregation step takes its tables as input and tests can substitute
/// smaller fixtures.
pub fn vct_regions() -> Vec<Region> {
    vec![
        Region {
            name: "Americas",
            tournaments: &[],
            teams: AMERICAS_TEAMS,
        },
        Region {
            name: "China",
            tournaments: &[],
            teams: CHINA_TEAMS,
        },
        Region {
            name: "EMEA",
            tournaments: &[],
            teams: EMEA_TEAMS,
        },
        Region {
            name: "Pacific",
            tournaments: &[],
            teams: PACIFIC_TEAMS,
        },
    ]
}
