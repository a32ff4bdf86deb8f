//! Built-in WISC-IV normative tables.
//!
//! Sum of scaled scores → composite, per index, and composite → percentile
//! rank and 95% confidence interval, shared by every index. Sums outside the
//! published range have no entry.

use cognita_core::models::index::IndexId;

#[rustfmt::skip]
pub(crate) const ICV_SUMS: &[(u32, u32)] = &[
    (3, 47), (4, 49), (5, 51), (6, 53), (7, 55), (8, 57), (9, 59), (10, 61), (11, 63), (12, 65),
    (13, 67), (14, 69), (15, 71), (16, 73), (17, 75), (18, 77), (19, 79), (20, 81), (21, 83),
    (22, 85), (23, 87), (24, 89), (25, 91), (26, 93), (27, 95), (28, 97), (29, 99), (30, 101),
    (31, 103), (32, 105), (33, 107), (34, 109), (35, 111), (36, 113), (37, 115), (38, 117),
    (39, 119), (40, 121), (41, 123), (42, 125), (43, 127), (44, 129), (45, 131), (46, 133),
    (47, 135), (48, 137), (49, 139), (50, 141), (51, 143), (52, 145), (53, 147), (54, 149),
    (55, 151), (56, 153), (57, 155),
];

#[rustfmt::skip]
pub(crate) const IOP_SUMS: &[(u32, u32)] = &[
    (3, 48), (4, 50), (5, 52), (6, 54), (7, 56), (8, 58), (9, 60), (10, 62), (11, 63), (12, 65),
    (13, 67), (14, 69), (15, 71), (16, 73), (17, 75), (18, 77), (19, 79), (20, 81), (21, 83),
    (22, 85), (23, 87), (24, 88), (25, 90), (26, 92), (27, 94), (28, 96), (29, 98), (30, 100),
    (31, 102), (32, 104), (33, 106), (34, 108), (35, 110), (36, 112), (37, 113), (38, 115),
    (39, 117), (40, 119), (41, 121), (42, 123), (43, 125), (44, 127), (45, 129), (46, 131),
    (47, 133), (48, 135), (49, 137), (50, 138), (51, 140), (52, 142), (53, 144), (54, 146),
    (55, 148), (56, 150), (57, 152),
];

#[rustfmt::skip]
pub(crate) const IMO_SUMS: &[(u32, u32)] = &[
    (2, 47), (3, 50), (4, 53), (5, 56), (6, 59), (7, 62), (8, 65), (9, 68), (10, 71), (11, 74),
    (12, 76), (13, 79), (14, 82), (15, 85), (16, 88), (17, 91), (18, 94), (19, 97), (20, 100),
    (21, 103), (22, 106), (23, 109), (24, 112), (25, 115), (26, 118), (27, 121), (28, 124),
    (29, 126), (30, 129), (31, 132), (32, 135), (33, 138), (34, 141), (35, 144), (36, 147),
    (37, 150), (38, 153),
];

#[rustfmt::skip]
pub(crate) const IVP_SUMS: &[(u32, u32)] = &[
    (2, 49), (3, 52), (4, 55), (5, 58), (6, 60), (7, 63), (8, 66), (9, 69), (10, 72), (11, 75),
    (12, 77), (13, 80), (14, 83), (15, 86), (16, 89), (17, 92), (18, 94), (19, 97), (20, 100),
    (21, 103), (22, 106), (23, 108), (24, 111), (25, 114), (26, 117), (27, 120), (28, 123),
    (29, 125), (30, 128), (31, 131), (32, 134), (33, 137), (34, 140), (35, 142), (36, 145),
    (37, 148), (38, 151),
];

#[rustfmt::skip]
pub(crate) const QIT_SUMS: &[(u32, u32)] = &[
    (14, 40), (15, 41), (16, 41), (17, 42), (18, 43), (19, 43), (20, 44), (21, 45), (22, 46),
    (23, 46), (24, 47), (25, 48), (26, 48), (27, 49), (28, 50), (29, 50), (30, 51), (31, 52),
    (32, 53), (33, 53), (34, 54), (35, 55), (36, 55), (37, 56), (38, 57), (39, 57), (40, 58),
    (41, 59), (42, 60), (43, 60), (44, 61), (45, 62), (46, 62), (47, 63), (48, 64), (49, 64),
    (50, 65), (51, 66), (52, 67), (53, 67), (54, 68), (55, 69), (56, 69), (57, 70), (58, 71),
    (59, 71), (60, 72), (61, 73), (62, 73), (63, 74), (64, 75), (65, 76), (66, 76), (67, 77),
    (68, 78), (69, 78), (70, 79), (71, 80), (72, 80), (73, 81), (74, 82), (75, 83), (76, 83),
    (77, 84), (78, 85), (79, 85), (80, 86), (81, 87), (82, 87), (83, 88), (84, 89), (85, 90),
    (86, 90), (87, 91), (88, 92), (89, 92), (90, 93), (91, 94), (92, 94), (93, 95), (94, 96),
    (95, 97), (96, 97), (97, 98), (98, 99), (99, 99), (100, 100), (101, 101), (102, 101),
    (103, 102), (104, 103), (105, 103), (106, 104), (107, 105), (108, 106), (109, 106),
    (110, 107), (111, 108), (112, 108), (113, 109), (114, 110), (115, 110), (116, 111),
    (117, 112), (118, 113), (119, 113), (120, 114), (121, 115), (122, 115), (123, 116),
    (124, 117), (125, 117), (126, 118), (127, 119), (128, 120), (129, 120), (130, 121),
    (131, 122), (132, 122), (133, 123), (134, 124), (135, 124), (136, 125), (137, 126),
    (138, 127), (139, 127), (140, 128), (141, 129), (142, 129), (143, 130), (144, 131),
    (145, 131), (146, 132), (147, 133), (148, 133), (149, 134), (150, 135), (151, 136),
    (152, 136), (153, 137), (154, 138), (155, 138), (156, 139), (157, 140), (158, 140),
    (159, 141), (160, 142), (161, 143), (162, 143), (163, 144), (164, 145), (165, 145),
    (166, 146), (167, 147), (168, 147), (169, 148), (170, 149), (171, 150), (172, 150),
    (173, 151), (174, 152), (175, 152), (176, 153), (177, 154), (178, 154), (179, 155),
    (180, 156), (181, 157), (182, 157), (183, 158), (184, 159), (185, 159), (186, 160),
];

/// (composite, percentile rank, CI lower, CI upper)
pub(crate) const COMPOSITE_NORMS: &[(u32, &str, u32, u32)] = &[
    (40, "<0,1", 37, 51),
    (41, "<0,1", 38, 52),
    (42, "<0,1", 38, 52),
    (43, "<0,1", 39, 53),
    (44, "<0,1", 40, 54),
    (45, "<0,1", 41, 55),
    (46, "<0,1", 42, 56),
    (47, "<0,1", 43, 57),
    (48, "<0,1", 44, 58),
    (49, "<0,1", 45, 59),
    (50, "<0,1", 46, 60),
    (51, "<0,1", 47, 61),
    (52, "<0,1", 48, 62),
    (53, "<0,1", 49, 63),
    (54, "0,1", 50, 64),
    (55, "0,1", 51, 65),
    (56, "0,2", 52, 66),
    (57, "0,2", 53, 67),
    (58, "0,3", 54, 68),
    (59, "0,3", 54, 68),
    (60, "0,4", 55, 69),
    (61, "0,5", 56, 70),
    (62, "0,6", 57, 71),
    (63, "0,7", 58, 72),
    (64, "0,8", 59, 73),
    (65, "1", 60, 74),
    (66, "1", 61, 75),
    (67, "1", 62, 76),
    (68, "2", 63, 77),
    (69, "2", 64, 78),
    (70, "2", 65, 79),
    (71, "3", 66, 80),
    (72, "3", 67, 81),
    (73, "4", 68, 82),
    (74, "4", 69, 83),
    (75, "5", 70, 83),
    (76, "5", 70, 84),
    (77, "6", 71, 85),
    (78, "7", 72, 86),
    (79, "8", 73, 87),
    (80, "9", 74, 88),
    (81, "10", 75, 89),
    (82, "12", 76, 90),
    (83, "13", 77, 91),
    (84, "14", 78, 92),
    (85, "16", 79, 93),
    (86, "18", 80, 94),
    (87, "19", 81, 95),
    (88, "21", 82, 96),
    (89, "23", 83, 97),
    (90, "25", 84, 98),
    (91, "27", 85, 99),
    (92, "30", 85, 99),
    (93, "32", 86, 100),
    (94, "34", 87, 101),
    (95, "37", 88, 102),
    (96, "39", 89, 103),
    (97, "42", 90, 104),
    (98, "45", 91, 105),
    (99, "47", 92, 106),
    (100, "50", 93, 107),
    (101, "53", 94, 108),
    (102, "55", 95, 109),
    (103, "58", 96, 110),
    (104, "61", 97, 111),
    (105, "63", 98, 112),
    (106, "66", 99, 113),
    (107, "68", 100, 114),
    (108, "70", 101, 115),
    (109, "73", 101, 115),
    (110, "75", 102, 116),
    (111, "77", 103, 117),
    (112, "79", 104, 118),
    (113, "81", 105, 119),
    (114, "82", 106, 120),
    (115, "84", 107, 121),
    (116, "86", 108, 122),
    (117, "87", 109, 123),
    (118, "88", 110, 124),
    (119, "90", 111, 125),
    (120, "91", 112, 126),
    (121, "92", 113, 127),
    (122, "93", 114, 128),
    (123, "94", 115, 129),
    (124, "95", 116, 130),
    (125, "95", 117, 130),
    (126, "96", 117, 131),
    (127, "96", 118, 132),
    (128, "97", 119, 133),
    (129, "97", 120, 134),
    (130, "98", 121, 135),
    (131, "98", 122, 136),
    (132, "98", 123, 137),
    (133, "99", 124, 138),
    (134, "99", 125, 139),
    (135, "99", 126, 140),
    (136, "99,2", 127, 141),
    (137, "99,3", 128, 142),
    (138, "99,4", 129, 143),
    (139, "99,5", 130, 144),
    (140, "99,6", 131, 145),
    (141, "99,7", 132, 146),
    (142, "99,7", 132, 146),
    (143, "99,8", 133, 147),
    (144, "99,8", 134, 148),
    (145, "99,9", 135, 149),
    (146, "99,9", 136, 150),
    (147, ">99,9", 137, 151),
    (148, ">99,9", 138, 152),
    (149, ">99,9", 139, 153),
    (150, ">99,9", 140, 154),
    (151, ">99,9", 141, 155),
    (152, ">99,9", 142, 156),
    (153, ">99,9", 143, 157),
    (154, ">99,9", 144, 158),
    (155, ">99,9", 145, 159),
    (156, ">99,9", 146, 160),
    (157, ">99,9", 147, 161),
    (158, ">99,9", 148, 162),
    (159, ">99,9", 148, 162),
    (160, ">99,9", 149, 163),
];

pub(crate) fn sums(index: IndexId) -> &'static [(u32, u32)] {
    match index {
        IndexId::Icv => ICV_SUMS,
        IndexId::Iop => IOP_SUMS,
        IndexId::Imo => IMO_SUMS,
        IndexId::Ivp => IVP_SUMS,
        IndexId::Qit => QIT_SUMS,
    }
}
