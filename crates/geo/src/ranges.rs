//! Built-in postal code ranges per federal state.
//!
//! Source: the cebus.net "PLZ Bundesland" assignment table. Bounds are
//! inclusive. Codes listed there only as degenerate single-code entries (most
//! of them shared by two neighbouring states) belong to no range, so no code
//! is claimed twice.

use crate::range::ZipRange;
use crate::state::State;

/// Postal code ranges of every federal state.
pub static RANGES: &[(State, &[ZipRange])] = &[
    (
        State::Sachsen,
        &[
            ZipRange::new(1001, 1935),
            ZipRange::new(2601, 2998),
            ZipRange::new(4001, 4578),
            ZipRange::new(4641, 4888),
            ZipRange::new(8001, 9668),
        ],
    ),
    (
        State::Brandenburg,
        &[
            ZipRange::new(1941, 1997),
            ZipRange::new(3001, 3252),
            ZipRange::new(4891, 4937),
            ZipRange::new(14401, 14714),
            ZipRange::new(14723, 16948),
            ZipRange::new(17261, 17290),
            ZipRange::new(19307, 19356),
        ],
    ),
    (
        State::Thueringen,
        &[
            ZipRange::new(4581, 4638),
            ZipRange::new(6551, 6577),
            ZipRange::new(7301, 7918),
            ZipRange::new(7920, 7949),
            ZipRange::new(7953, 7979),
            ZipRange::new(7985, 7988),
            ZipRange::new(36401, 36468),
            ZipRange::new(37301, 37358),
            ZipRange::new(96501, 96528),
            ZipRange::new(98501, 99997),
        ],
    ),
    (
        State::SachsenAnhalt,
        &[
            ZipRange::new(6001, 6547),
            ZipRange::new(6601, 6927),
            ZipRange::new(29401, 29415),
            ZipRange::new(38481, 38488),
            ZipRange::new(38801, 39648),
        ],
    ),
    (
        State::Berlin,
        &[
            ZipRange::new(10001, 14329),
        ],
    ),
    (
        State::MecklenburgVorpommern,
        &[
            ZipRange::new(17001, 17255),
            ZipRange::new(17258, 17258),
            ZipRange::new(17301, 17308),
            ZipRange::new(17309, 17320),
            ZipRange::new(17321, 17321),
            ZipRange::new(17328, 17330),
            ZipRange::new(17337, 19259),
            ZipRange::new(19273, 19305),
            ZipRange::new(19357, 19416),
            ZipRange::new(23921, 23998),
        ],
    ),
    (
        State::Niedersachsen,
        &[
            ZipRange::new(19271, 19272),
            ZipRange::new(21202, 21448),
            ZipRange::new(21601, 21788),
            ZipRange::new(26001, 27477),
            ZipRange::new(27607, 27808),
            ZipRange::new(28784, 29398),
            ZipRange::new(29431, 31867),
            ZipRange::new(34331, 34352),
            ZipRange::new(37001, 37193),
            ZipRange::new(37197, 37198),
            ZipRange::new(37401, 37648),
            ZipRange::new(37689, 37690),
            ZipRange::new(37697, 38478),
            ZipRange::new(38501, 38728),
            ZipRange::new(48442, 48464),
            ZipRange::new(48478, 48479),
            ZipRange::new(48486, 48487),
            ZipRange::new(48497, 48530),
            ZipRange::new(49001, 49458),
            ZipRange::new(49551, 49848),
        ],
    ),
    (
        State::Hamburg,
        &[
            ZipRange::new(20001, 21036),
            ZipRange::new(21039, 21169),
            ZipRange::new(22001, 22112),
            ZipRange::new(22115, 22142),
            ZipRange::new(22147, 22785),
        ],
    ),
    (
        State::SchleswigHolstein,
        &[
            ZipRange::new(21451, 21520),
            ZipRange::new(21524, 21528),
            ZipRange::new(22801, 23918),
            ZipRange::new(24001, 25998),
            ZipRange::new(27483, 27497),
        ],
    ),
    (
        State::Bremen,
        &[
            ZipRange::new(27501, 27579),
            ZipRange::new(28001, 28778),
        ],
    ),
    (
        State::NordrheinWestfalen,
        &[
            ZipRange::new(32001, 33828),
            ZipRange::new(34401, 34438),
            ZipRange::new(37651, 37687),
            ZipRange::new(37692, 37695),
            ZipRange::new(40001, 48431),
            ZipRange::new(48466, 48476),
            ZipRange::new(48481, 48484),
            ZipRange::new(48489, 48495),
            ZipRange::new(48541, 48738),
            ZipRange::new(49461, 49548),
            ZipRange::new(50101, 51596),
            ZipRange::new(51601, 53358),
            ZipRange::new(53581, 53603),
            ZipRange::new(53621, 53948),
            ZipRange::new(57001, 57488),
            ZipRange::new(58001, 59965),
        ],
    ),
    (
        State::Hessen,
        &[
            ZipRange::new(34001, 34328),
            ZipRange::new(34356, 34398),
            ZipRange::new(34441, 36398),
            ZipRange::new(37194, 37194),
            ZipRange::new(37201, 37298),
            ZipRange::new(55240, 55251),
            ZipRange::new(60001, 63698),
            ZipRange::new(64201, 64752),
            ZipRange::new(64754, 65325),
            ZipRange::new(65327, 65390),
            ZipRange::new(65392, 65555),
            ZipRange::new(65583, 65619),
            ZipRange::new(65701, 65935),
            ZipRange::new(68501, 68518),
            ZipRange::new(68601, 68648),
            ZipRange::new(69235, 69238),
            ZipRange::new(69430, 69430),
            ZipRange::new(69479, 69487),
            ZipRange::new(69503, 69508),
            ZipRange::new(69515, 69517),
        ],
    ),
    (
        State::RheinlandPfalz,
        &[
            ZipRange::new(53401, 53578),
            ZipRange::new(53614, 53618),
            ZipRange::new(54181, 55238),
            ZipRange::new(55253, 56868),
            ZipRange::new(57501, 57647),
            ZipRange::new(65558, 65581),
            ZipRange::new(65621, 65625),
            ZipRange::new(66461, 66508),
            ZipRange::new(66841, 67828),
            ZipRange::new(76711, 76890),
        ],
    ),
    (
        State::Bayern,
        &[
            ZipRange::new(63701, 63773),
            ZipRange::new(63776, 63927),
            ZipRange::new(63930, 63938),
            ZipRange::new(80001, 87489),
            ZipRange::new(87493, 87560),
            ZipRange::new(87571, 87788),
            ZipRange::new(88101, 88145),
            ZipRange::new(88147, 88178),
            ZipRange::new(89201, 89448),
            ZipRange::new(90001, 96488),
            ZipRange::new(97001, 97858),
            ZipRange::new(97888, 97891),
            ZipRange::new(97901, 97908),
        ],
    ),
    (
        State::BadenWuerttemberg,
        &[
            ZipRange::new(68001, 68311),
            ZipRange::new(68520, 68548),
            ZipRange::new(68701, 69233),
            ZipRange::new(69240, 69428),
            ZipRange::new(69435, 69468),
            ZipRange::new(69489, 69501),
            ZipRange::new(69510, 69513),
            ZipRange::new(70001, 74591),
            ZipRange::new(74594, 76708),
            ZipRange::new(77601, 79878),
            ZipRange::new(88001, 88098),
            ZipRange::new(88181, 89078),
            ZipRange::new(89081, 89084),
            ZipRange::new(89090, 89197),
            ZipRange::new(89501, 89618),
            ZipRange::new(97861, 97876),
            ZipRange::new(97893, 97895),
            ZipRange::new(97897, 97899),
            ZipRange::new(97911, 97998),
        ],
    ),
    (
        State::Saarland,
        &[
            ZipRange::new(66001, 66458),
            ZipRange::new(66511, 66838),
        ],
    ),
];
