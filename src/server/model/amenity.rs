use crate::model::amenity::AmenityDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub id: String,
    pub name: String,
}

impl Amenity {
    pub fn into_dto(self) -> AmenityDto {
        AmenityDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::amenity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
