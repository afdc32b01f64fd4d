//! The canonical 118 elements, compiled in.

use super::ElementSource;
use crate::element::Element;
use crate::Result;

const TM: &str = "transition metal";
const PTM: &str = "post-transition metal";
const LN: &str = "lanthanide";
const AN: &str = "actinide";
const AK: &str = "alkali metal";
const AE: &str = "alkaline earth metal";
const NG: &str = "noble gas";
const ML: &str = "metalloid";
const DN: &str = "diatomic nonmetal";
const PN: &str = "polyatomic nonmetal";

/// (number, symbol, name, standard atomic mass, category)
#[rustfmt::skip]
const ELEMENTS: [(u32, &str, &str, f64, &str); 118] = [
    (1, "H", "Hydrogen", 1.008, DN),
    (2, "He", "Helium", 4.002602, NG),
    (3, "Li", "Lithium", 6.94, AK),
    (4, "Be", "Beryllium", 9.0121831, AE),
    (5, "B", "Boron", 10.81, ML),
    (6, "C", "Carbon", 12.011, PN),
    (7, "N", "Nitrogen", 14.007, DN),
    (8, "O", "Oxygen", 15.999, DN),
    (9, "F", "Fluorine", 18.998403163, DN),
    (10, "Ne", "Neon", 20.1797, NG),
    (11, "Na", "Sodium", 22.98976928, AK),
    (12, "Mg", "Magnesium", 24.305, AE),
    (13, "Al", "Aluminium", 26.9815385, PTM),
    (14, "Si", "Silicon", 28.085, ML),
    (15, "P", "Phosphorus", 30.973761998, PN),
    (16, "S", "Sulfur", 32.06, PN),
    (17, "Cl", "Chlorine", 35.45, DN),
    (18, "Ar", "Argon", 39.948, NG),
    (19, "K", "Potassium", 39.0983, AK),
    (20, "Ca", "Calcium", 40.078, AE),
    (21, "Sc", "Scandium", 44.955908, TM),
    (22, "Ti", "Titanium", 47.867, TM),
    (23, "V", "Vanadium", 50.9415, TM),
    (24, "Cr", "Chromium", 51.9961, TM),
    (25, "Mn", "Manganese", 54.938044, TM),
    (26, "Fe", "Iron", 55.845, TM),
    (27, "Co", "Cobalt", 58.933194, TM),
    (28, "Ni", "Nickel", 58.6934, TM),
    (29, "Cu", "Copper", 63.546, TM),
    (30, "Zn", "Zinc", 65.38, TM),
    (31, "Ga", "Gallium", 69.723, PTM),
    (32, "Ge", "Germanium", 72.630, ML),
    (33, "As", "Arsenic", 74.921595, ML),
    (34, "Se", "Selenium", 78.971, PN),
    (35, "Br", "Bromine", 79.904, DN),
    (36, "Kr", "Krypton", 83.798, NG),
    (37, "Rb", "Rubidium", 85.4678, AK),
    (38, "Sr", "Strontium", 87.62, AE),
    (39, "Y", "Yttrium", 88.90584, TM),
    (40, "Zr", "Zirconium", 91.224, TM),
    (41, "Nb", "Niobium", 92.90637, TM),
    (42, "Mo", "Molybdenum", 95.95, TM),
    (43, "Tc", "Technetium", 98.0, TM),
    (44, "Ru", "Ruthenium", 101.07, TM),
    (45, "Rh", "Rhodium", 102.90550, TM),
    (46, "Pd", "Palladium", 106.42, TM),
    (47, "Ag", "Silver", 107.8682, TM),
    (48, "Cd", "Cadmium", 112.414, TM),
    (49, "In", "Indium", 114.818, PTM),
    (50, "Sn", "Tin", 118.710, PTM),
    (51, "Sb", "Antimony", 121.760, ML),
    (52, "Te", "Tellurium", 127.60, ML),
    (53, "I", "Iodine", 126.90447, DN),
    (54, "Xe", "Xenon", 131.293, NG),
    (55, "Cs", "Cesium", 132.90545196, AK),
    (56, "Ba", "Barium", 137.327, AE),
    (57, "La", "Lanthanum", 138.90547, LN),
    (58, "Ce", "Cerium", 140.116, LN),
    (59, "Pr", "Praseodymium", 140.90766, LN),
    (60, "Nd", "Neodymium", 144.242, LN),
    (61, "Pm", "Promethium", 145.0, LN),
    (62, "Sm", "Samarium", 150.36, LN),
    (63, "Eu", "Europium", 151.964, LN),
    (64, "Gd", "Gadolinium", 157.25, LN),
    (65, "Tb", "Terbium", 158.92535, LN),
    (66, "Dy", "Dysprosium", 162.500, LN),
    (67, "Ho", "Holmium", 164.93033, LN),
    (68, "Er", "Erbium", 167.259, LN),
    (69, "Tm", "Thulium", 168.93422, LN),
    (70, "Yb", "Ytterbium", 173.045, LN),
    (71, "Lu", "Lutetium", 174.9668, LN),
    (72, "Hf", "Hafnium", 178.49, TM),
    (73, "Ta", "Tantalum", 180.94788, TM),
    (74, "W", "Tungsten", 183.84, TM),
    (75, "Re", "Rhenium", 186.207, TM),
    (76, "Os", "Osmium", 190.23, TM),
    (77, "Ir", "Iridium", 192.217, TM),
    (78, "Pt", "Platinum", 195.084, TM),
    (79, "Au", "Gold", 196.966569, TM),
    (80, "Hg", "Mercury", 200.592, TM),
    (81, "Tl", "Thallium", 204.38, PTM),
    (82, "Pb", "Lead", 207.2, PTM),
    (83, "Bi", "Bismuth", 208.98040, PTM),
    (84, "Po", "Polonium", 209.0, PTM),
    (85, "At", "Astatine", 210.0, ML),
    (86, "Rn", "Radon", 222.0, NG),
    (87, "Fr", "Francium", 223.0, AK),
    (88, "Ra", "Radium", 226.0, AE),
    (89, "Ac", "Actinium", 227.0, AN),
    (90, "Th", "Thorium", 232.0377, AN),
    (91, "Pa", "Protactinium", 231.03588, AN),
    (92, "U", "Uranium", 238.02891, AN),
    (93, "Np", "Neptunium", 237.0, AN),
    (94, "Pu", "Plutonium", 244.0, AN),
    (95, "Am", "Americium", 243.0, AN),
    (96, "Cm", "Curium", 247.0, AN),
    (97, "Bk", "Berkelium", 247.0, AN),
    (98, "Cf", "Californium", 251.0, AN),
    (99, "Es", "Einsteinium", 252.0, AN),
    (100, "Fm", "Fermium", 257.0, AN),
    (101, "Md", "Mendelevium", 258.0, AN),
    (102, "No", "Nobelium", 259.0, AN),
    (103, "Lr", "Lawrencium", 266.0, AN),
    (104, "Rf", "Rutherfordium", 267.0, TM),
    (105, "Db", "Dubnium", 268.0, TM),
    (106, "Sg", "Seaborgium", 269.0, TM),
    (107, "Bh", "Bohrium", 270.0, TM),
    (108, "Hs", "Hassium", 269.0, TM),
    (109, "Mt", "Meitnerium", 278.0, "unknown, probably transition metal"),
    (110, "Ds", "Darmstadtium", 281.0, "unknown, probably transition metal"),
    (111, "Rg", "Roentgenium", 282.0, "unknown, probably transition metal"),
    (112, "Cn", "Copernicium", 285.0, TM),
    (113, "Nh", "Nihonium", 286.0, "unknown, probably transition metal"),
    (114, "Fl", "Flerovium", 289.0, PTM),
    (115, "Mc", "Moscovium", 290.0, "unknown, probably post-transition metal"),
    (116, "Lv", "Livermorium", 293.0, "unknown, probably post-transition metal"),
    (117, "Ts", "Tennessine", 294.0, "unknown, probably metalloid"),
    (118, "Og", "Oganesson", 294.0, "unknown, predicted to be noble gas"),
];

/// All 118 elements in atomic-number order.
pub fn elements() -> Vec<Element> {
    ELEMENTS
        .iter()
        .map(|&(number, symbol, name, mass, category)| {
            Element::new(number, symbol, name, mass, category)
        })
        .collect()
}

/// Source backed by the compiled-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl ElementSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded table".to_string()
    }

    fn load(&self) -> Result<Vec<Element>> {
        Ok(elements())
    }
}
