use vcasky_shared::Airport;

/// Maximum number of matches returned by [`AirportDirectory::search`].
pub const SEARCH_LIMIT: usize = 10;

const POPULAR_CODES: [&str; 8] = ["GRU", "GIG", "BSB", "CNF", "SSA", "REC", "FOR", "POA"];

// (code, name, city, country)
const BUILTIN_AIRPORTS: &[(&str, &str, &str, &str)] = &[
    // Brazil
    ("GRU", "Aeroporto Internacional de São Paulo/Guarulhos", "São Paulo", "Brasil"),
    ("CGH", "Aeroporto de Congonhas", "São Paulo", "Brasil"),
    ("GIG", "Aeroporto Internacional do Rio de Janeiro/Galeão", "Rio de Janeiro", "Brasil"),
    ("SDU", "Aeroporto Santos Dumont", "Rio de Janeiro", "Brasil"),
    ("BSB", "Aeroporto Internacional de Brasília", "Brasília", "Brasil"),
    ("CNF", "Aeroporto Internacional Tancredo Neves", "Belo Horizonte", "Brasil"),
    ("SSA", "Aeroporto Internacional de Salvador", "Salvador", "Brasil"),
    ("REC", "Aeroporto Internacional do Recife", "Recife", "Brasil"),
    ("FOR", "Aeroporto Internacional de Fortaleza", "Fortaleza", "Brasil"),
    ("POA", "Aeroporto Internacional Salgado Filho", "Porto Alegre", "Brasil"),
    ("CWB", "Aeroporto Internacional Afonso Pena", "Curitiba", "Brasil"),
    ("FLN", "Aeroporto Internacional Hercílio Luz", "Florianópolis", "Brasil"),
    ("MAO", "Aeroporto Internacional Eduardo Gomes", "Manaus", "Brasil"),
    ("BEL", "Aeroporto Internacional Val de Cans", "Belém", "Brasil"),
    ("VIT", "Aeroporto de Vitória", "Vitória", "Brasil"),
    // International
    ("JFK", "John F. Kennedy International Airport", "New York", "Estados Unidos"),
    ("LAX", "Los Angeles International Airport", "Los Angeles", "Estados Unidos"),
    ("MIA", "Miami International Airport", "Miami", "Estados Unidos"),
    ("LHR", "London Heathrow Airport", "London", "Reino Unido"),
    ("CDG", "Charles de Gaulle Airport", "Paris", "França"),
    ("FCO", "Leonardo da Vinci International Airport", "Rome", "Itália"),
    ("MAD", "Adolfo Suárez Madrid–Barajas Airport", "Madrid", "Espanha"),
    ("LIS", "Lisbon Airport", "Lisbon", "Portugal"),
    ("AMS", "Amsterdam Airport Schiphol", "Amsterdam", "Holanda"),
    ("FRA", "Frankfurt Airport", "Frankfurt", "Alemanha"),
    ("EZE", "Ezeiza International Airport", "Buenos Aires", "Argentina"),
    ("SCL", "Arturo Merino Benítez International Airport", "Santiago", "Chile"),
    ("LIM", "Jorge Chávez International Airport", "Lima", "Peru"),
    ("BOG", "El Dorado International Airport", "Bogotá", "Colômbia"),
    ("CCS", "Simón Bolívar International Airport", "Caracas", "Venezuela"),
];

/// Read-only airport reference table.
///
/// Built once at start-up and shared by reference (`Arc`) between the
/// catalog, the normalizer and the search service.
#[derive(Debug, Clone)]
pub struct AirportDirectory {
    airports: Vec<Airport>,
}

impl AirportDirectory {
    /// Directory over the built-in table.
    pub fn builtin() -> Self {
        Self::from_airports(
            BUILTIN_AIRPORTS
                .iter()
                .map(|(code, name, city, country)| Airport::new(code, name, city, country))
                .collect(),
        )
    }

    pub fn from_airports(airports: Vec<Airport>) -> Self {
        Self { airports }
    }

    /// Case-insensitive exact match on the airport code.
    pub fn lookup(&self, code: &str) -> Option<&Airport> {
        self.airports
            .iter()
            .find(|airport| airport.code.eq_ignore_ascii_case(code))
    }

    /// Case-insensitive substring match on code, name, city or country.
    ///
    /// Results keep table order and are capped at [`SEARCH_LIMIT`]. An empty
    /// query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Airport> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.airports
            .iter()
            .filter(|airport| {
                airport.code.to_lowercase().contains(&needle)
                    || airport.name.to_lowercase().contains(&needle)
                    || airport.city.to_lowercase().contains(&needle)
                    || airport.country.to_lowercase().contains(&needle)
            })
            .take(SEARCH_LIMIT)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[Airport] {
        &self.airports
    }

    /// Busiest Brazilian airports, in table order.
    pub fn popular(&self) -> Vec<Airport> {
        self.airports
            .iter()
            .filter(|airport| POPULAR_CODES.contains(&airport.code.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for AirportDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
