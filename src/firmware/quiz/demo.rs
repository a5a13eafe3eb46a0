use super::Question;

/// Built-in star-dome bank used when no question asset is flashed. Three
/// rounds over the sixteen shell markers: constellations, their lead
/// stars, and one deep-sky target each. Windows are centered on the marker
/// directions with the same margins the production asset uses.
pub(crate) static DEMO_QUESTIONS: [Question; 48] = [
    Question::new("Point at Ursa Minor", 10.4, 30.4, -16.0, 16.0),
    Question::new("Point at Ursa Major", 25.7, 45.7, -153.5, -121.5),
    Question::new("Point at Cassiopeia", 36.6, 56.6, 69.0, 101.0),
    Question::new("Point at Cygnus", 45.8, 65.8, -68.5, -36.5),
    Question::new("Point at Lyra", 54.1, 74.1, 154.0, 180.0),
    Question::new("Point at Aquila", 61.8, 81.8, 16.5, 48.5),
    Question::new("Point at Orion", 69.2, 89.2, -121.0, -89.0),
    Question::new("Point at Taurus", 76.4, 96.4, 101.4, 133.4),
    Question::new("Point at Gemini", 83.6, 103.6, -36.1, -4.1),
    Question::new("Point at Leo", 90.8, 110.8, -173.6, -141.6),
    Question::new("Point at Bootes", 98.2, 118.2, 48.9, 80.9),
    Question::new("Point at Virgo", 105.9, 125.9, -88.6, -56.6),
    Question::new("Point at Scorpius", 114.2, 134.2, 133.9, 165.9),
    Question::new("Point at Sagittarius", 123.4, 143.4, -3.6, 28.4),
    Question::new("Point at Pegasus", 134.3, 154.3, -141.1, -109.1),
    Question::new("Point at Andromeda", 149.6, 169.6, 81.4, 113.4),
    Question::new("Find Polaris", 10.4, 30.4, -16.0, 16.0),
    Question::new("Find Dubhe", 25.7, 45.7, -153.5, -121.5),
    Question::new("Find Schedar", 36.6, 56.6, 69.0, 101.0),
    Question::new("Find Deneb", 45.8, 65.8, -68.5, -36.5),
    Question::new("Find Vega", 54.1, 74.1, 154.0, 180.0),
    Question::new("Find Altair", 61.8, 81.8, 16.5, 48.5),
    Question::new("Find Rigel", 69.2, 89.2, -121.0, -89.0),
    Question::new("Find Aldebaran", 76.4, 96.4, 101.4, 133.4),
    Question::new("Find Pollux", 83.6, 103.6, -36.1, -4.1),
    Question::new("Find Regulus", 90.8, 110.8, -173.6, -141.6),
    Question::new("Find Arcturus", 98.2, 118.2, 48.9, 80.9),
    Question::new("Find Spica", 105.9, 125.9, -88.6, -56.6),
    Question::new("Find Antares", 114.2, 134.2, 133.9, 165.9),
    Question::new("Find Nunki", 123.4, 143.4, -3.6, 28.4),
    Question::new("Find Markab", 134.3, 154.3, -141.1, -109.1),
    Question::new("Find Alpheratz", 149.6, 169.6, 81.4, 113.4),
    Question::new("Locate the north celestial pole", 10.4, 30.4, -16.0, 16.0),
    Question::new("Locate the Big Dipper", 25.7, 45.7, -153.5, -121.5),
    Question::new("Locate the W of Cassiopeia", 36.6, 56.6, 69.0, 101.0),
    Question::new("Locate the Northern Cross", 45.8, 65.8, -68.5, -36.5),
    Question::new("Locate the Ring Nebula", 54.1, 74.1, 154.0, 180.0),
    Question::new("Locate the Wild Duck Cluster", 61.8, 81.8, 16.5, 48.5),
    Question::new("Locate the Orion Nebula", 69.2, 89.2, -121.0, -89.0),
    Question::new("Locate the Pleiades", 76.4, 96.4, 101.4, 133.4),
    Question::new("Locate the cluster M35", 83.6, 103.6, -36.1, -4.1),
    Question::new("Locate the Leo Triplet", 90.8, 110.8, -173.6, -141.6),
    Question::new("Locate the globular cluster M3", 98.2, 118.2, 48.9, 80.9),
    Question::new("Locate the Sombrero Galaxy", 105.9, 125.9, -88.6, -56.6),
    Question::new("Locate the globular cluster M4", 114.2, 134.2, 133.9, 165.9),
    Question::new("Locate the Lagoon Nebula", 123.4, 143.4, -3.6, 28.4),
    Question::new("Locate the globular cluster M15", 134.3, 154.3, -141.1, -109.1),
    Question::new("Locate the Andromeda Galaxy", 149.6, 169.6, 81.4, 113.4),
];
