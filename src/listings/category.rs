/// The three listing tabs on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    UsedCars,
    NewCars,
    Bikes,
}

/// Where a category's listings come from and which container shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerBinding {
    pub endpoint: &'static str,
    pub container_id: &'static str,
}

impl Category {
    /// Page order.
    pub const ALL: [Category; 3] = [Category::UsedCars, Category::NewCars, Category::Bikes];

    pub fn endpoint(self) -> &'static str {
        match self {
            Category::UsedCars => "/used-cars",
            Category::NewCars => "/new-cars",
            Category::Bikes => "/bikes",
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            Category::UsedCars => "usedCarsContainer",
            Category::NewCars => "newCarsContainer",
            Category::Bikes => "bikesContainer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::UsedCars => "Used Cars",
            Category::NewCars => "New Cars",
            Category::Bikes => "Bikes",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Category::UsedCars => "used_cars.json",
            Category::NewCars => "new_cars.json",
            Category::Bikes => "bikes.json",
        }
    }

    pub fn binding(self) -> ContainerBinding {
        ContainerBinding {
            endpoint: self.endpoint(),
            container_id: self.container_id(),
        }
    }

    /// Looks up a category by its endpoint path, ignoring a trailing slash.
    pub fn from_endpoint(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        Self::ALL.into_iter().find(|c| c.endpoint() == path)
    }
}
