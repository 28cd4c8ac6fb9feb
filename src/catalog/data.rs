use super::CatalogEntry;

const fn task(
    name: &'static str,
    icon_id: i32,
    target_names: &'static [&'static str],
) -> CatalogEntry {
    CatalogEntry {
        name,
        target_names,
        icon_id,
    }
}

pub(super) static TASKS: &[CatalogEntry] = &[
    task("aberrant spectres", 7975, &["Spectre"]),
    task("abyssal demons", 7979, &[]),
    task("the abyssal sire", 13262, &[]),
    task("adamant dragons", 23270, &[]),
    task("the alchemical hydra", 22746, &[]),
    task("ankou", 20095, &[]),
    task("aviansies", 13504, &["Kree'arra", "Flight Kilisa", "Flockleader Geerin", "Wingman Skree"]),
    task("bandits", 4625, &["Bandit", "Black Heather", "Donny the Lad", "Speedy Keith"]),
    task("banshees", 4135, &[]),
    task("barrows brothers", 4732, &["Ahrim the Blighted", "Dharok the Wretched", "Guthan the Infested", "Karil the Tainted", "Torag the Corrupted", "Verac the Defiled"]),
    task("basilisks", 4139, &[]),
    task("bats", 6317, &["Death wing"]),
    task("bears", 13462, &[]),
    task("birds", 314, &["Chicken", "Rooster", "Terrorbird", "Seagull", "Vulture", "Duck", "Penguin"]),
    task("black demons", 8146, &[]),
    task("black dragons", 12524, &["Baby black dragon"]),
    task("black knights", 1165, &["Black Knight"]),
    task("bloodveld", 4136, &[]),
    task("blue dragons", 12520, &["Baby blue dragon"]),
    task("brine rats", 7983, &[]),
    task("bronze dragons", 12363, &[]),
    task("callisto", 13178, &[]),
    task("catablepon", 8154, &[]),
    task("cave bugs", 4521, &[]),
    task("cave crawlers", 4134, &[]),
    task("cave horrors", 8900, &[]),
    task("cave kraken", 3272, &[]),
    task("cave slimes", 4520, &[]),
    task("cerberus", 13247, &[]),
    task("chaos druids", 20595, &["Elder Chaos druid", "Chaos druid"]),
    task("the chaos elemental", 11995, &[]),
    task("chaos fanatic", 4675, &[]),
    task("cockatrice", 4137, &["Cockathrice"]),
    task("cows", 11919, &[]),
    task("crawling hands", 4133, &["Crushing hand"]),
    task("crazy archaeologists", 11990, &[]),
    task("crocodiles", 10149, &[]),
    task("dagannoth", 8141, &[]),
    task("dagannoth kings", 12644, &["Dagannoth Rex", "Dagannoth Prime", "Dagannoth Supreme"]),
    task("dark beasts", 4144, &["Night beast"]),
    task("dark warriors", 1165, &["Dark warrior"]),
    task("dogs", 8132, &["Jackal"]),
    task("drakes", 23041, &[]),
    task("dust devils", 4145, &["Choke devil"]),
    task("dwarves", 11200, &["Dwarf", "Black Guard"]),
    task("earth warriors", 12460, &[]),
    task("elves", 6105, &["Elf", "Iorwerth Warrior", "Iorwerth Archer"]),
    task("ents", 6020, &["Ent"]),
    task("fever spiders", 6709, &[]),
    task("fire giants", 1393, &[]),
    task("fleshcrawlers", 13495, &["Flesh crawler"]),
    task("fossil island wyverns", 21507, &["Ancient wyvern", "Long-tailed wyvern", "Spitting wyvern", "Taloned wyvern"]),
    task("gargoyles", 4147, &["Dusk", "Dawn"]),
    task("general graardor", 12650, &[]),
    task("ghosts", 552, &["Death wing", "Tortured soul"]),
    task("ghouls", 6722, &[]),
    task("the giant mole", 12646, &[]),
    task("goblins", 13447, &["Sergeant Strongstack", "Sergeant Grimspike", "Sergeant Steelwill"]),
    task("greater demons", 20023, &["K'ril Tsutsaroth", "Tstanon Karlak", "Skotizo"]),
    task("green dragons", 12518, &["Baby green dragon", "Elvarg"]),
    task("harpie bug swarms", 7050, &[]),
    task("hellhounds", 8137, &["Cerberus"]),
    task("hill giants", 13474, &["Cyclops"]),
    task("hobgoblins", 8133, &[]),
    task("hydras", 23042, &[]),
    task("icefiends", 4671, &[]),
    task("ice giants", 4671, &[]),
    task("ice warriors", 12462, &["Icelord"]),
    task("infernal mages", 4140, &["Malevolent mage"]),
    task("iron dragons", 12366, &[]),
    task("jellies", 4142, &["Jelly"]),
    task("jungle horrors", 13489, &[]),
    task("kalphite", 12640, &[]),
    task("the kalphite queen", 12647, &[]),
    task("killerwatts", 7160, &[]),
    task("king black dragon", 12653, &[]),
    task("kraken", 12655, &["Enormous Tentacle"]),
    task("kree'arra", 12649, &[]),
    task("k'ril tsutsaroth", 12652, &[]),
    task("kurask", 4146, &[]),
    task("lesser demons", 20020, &[]),
    task("lizardmen", 13391, &["Lizardman"]),
    task("lizards", 6695, &["Desert lizard", "Sulphur lizard", "Small lizard", "Lizard"]),
    task("magic axes", 1363, &["Magic axe"]),
    task("mammoths", 10516, &["Mammoth"]),
    task("minions of scabaras", 9028, &["Scarab swarm", "Locust rider", "Scarab mage"]),
    task("minotaurs", 13453, &[]),
    task("mithril dragons", 12369, &[]),
    task("mogres", 6661, &[]),
    task("molanisks", 10997, &[]),
    task("monkeys", 13450, &["Tortured gorilla"]),
    task("moss giants", 20756, &[]),
    task("mutated zygomites", 7420, &["Zygomite", "Fungi"]),
    task("nechryael", 4143, &["Nechryarch"]),
    task("ogres", 13477, &[]),
    task("otherworldly beings", 10452, &[]),
    task("pirates", 2651, &["Pirate"]),
    task("pyrefiends", 4138, &["Flaming pyrelord"]),
    task("rats", 300, &[]),
    task("red dragons", 8134, &["Baby red dragon"]),
    task("revenants", 21802, &["Revenant imp", "Revenant goblin", "Revenant pyrefiend", "Revenant hobgoblin", "Revenant cyclops", "Revenant hellhound", "Revenant demon", "Revenant ork", "Revenant dark beast", "Revenant knight", "Revenant dragon"]),
    task("rockslugs", 4132, &[]),
    task("rune dragons", 23273, &[]),
    task("sarachnis", 23495, &[]),
    task("scorpia", 13181, &[]),
    task("scorpions", 13495, &[]),
    task("sea snakes", 7576, &[]),
    task("shades", 546, &["Loar", "Phrin", "Riyl", "Asyn", "Fiyr", "Urium"]),
    task("shadow warriors", 1165, &[]),
    task("skeletal wyverns", 6811, &[]),
    task("skeletons", 6107, &[]),
    task("smoke devils", 12444, &[]),
    task("spiders", 13468, &[]),
    task("spiritual creatures", 11840, &["Spiritual ranger", "Spiritual mage", "Spiritual warrior"]),
    task("steel dragons", 12372, &[]),
    task("sulphur lizards", 22804, &[]),
    task("suqahs", 9079, &[]),
    task("terror dogs", 10591, &[]),
    task("the thermonuclear smoke devil", 12648, &[]),
    task("trolls", 6102, &["Dad", "Arrg"]),
    task("turoth", 4131, &[]),
    task("tzhaar", 13501, &[]),
    task("tztok-jad", 13225, &[]),
    task("tzkal-zuk", 22319, &[]),
    task("vampyres", 1549, &["Vyrewatch", "Vampire"]),
    task("venenatis", 13177, &[]),
    task("vet'ion", 13179, &[]),
    task("vorkath", 21992, &[]),
    task("wall beasts", 4519, &[]),
    task("waterfiends", 571, &[]),
    task("werewolves", 2952, &["Werewolf"]),
    task("wolves", 2859, &["Wolf"]),
    task("wyrms", 23040, &[]),
    task("zilyana", 12651, &["Commander Zilyana"]),
    task("zombies", 6722, &["Undead", "Zombie"]),
    task("zulrah", 12921, &[]),
];
