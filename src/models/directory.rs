use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::directory::{Doctor, Patient, Supplier};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PatientModel {
    pub id: String,
    pub name: String,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl PatientModel {
    pub fn to_proto(&self) -> Patient {
        Patient {
            id: self.id.clone(),
            name: self.name.clone(),
            gender: self.gender.clone().unwrap_or_default(),
            birth_date: self.birth_date.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DoctorModel {
    pub id: String,
    pub name: String,
    pub specialization: Option<String>,
    pub license_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl DoctorModel {
    pub fn to_proto(&self) -> Doctor {
        Doctor {
            id: self.id.clone(),
            name: self.name.clone(),
            specialization: self.specialization.clone().unwrap_or_default(),
            license_number: self.license_number.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SupplierModel {
    pub id: String,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl SupplierModel {
    pub fn to_proto(&self) -> Supplier {
        Supplier {
            id: self.id.clone(),
            name: self.name.clone(),
            contact_person: self.contact_person.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}
