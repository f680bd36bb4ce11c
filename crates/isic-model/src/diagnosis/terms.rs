//! Diagnosis hierarchy terms.
//!
//! Each entry is a colon-joined path from the root category to the term.
//! Entries are grouped by depth; every parent path appears before its children.

pub(crate) static DIAGNOSIS_PATHS: [&str; 418] = [
    "Benign",
    "Indeterminate",
    "Malignant",
    "Benign:Benign - Other",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine",
    "Benign:Benign adnexal epithelial proliferations - Follicular",
    "Benign:Benign adnexal epithelial proliferations - Sebaceous",
    "Benign:Benign epidermal proliferations",
    "Benign:Benign melanocytic proliferations",
    "Benign:Benign soft tissue proliferations - Adipocytic",
    "Benign:Benign soft tissue proliferations - Cartilagenous and ossifying",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic",
    "Benign:Benign soft tissue proliferations - Muscle tissue or myofibroblastic",
    "Benign:Benign soft tissue proliferations - Myoepithelial",
    "Benign:Benign soft tissue proliferations - Neural",
    "Benign:Benign soft tissue proliferations - Vascular",
    "Benign:Collision - Only benign proliferations",
    "Benign:Cysts",
    "Benign:Exogenous",
    "Benign:Flat melanotic pigmentations - not melanocytic nevus",
    "Benign:Hemorrhagic lesions",
    "Benign:Inflammatory or infectious diseases",
    "Benign:Langerhans cell proliferations",
    "Benign:Mast cell proliferations",
    "Indeterminate:Indeterminate epidermal proliferations",
    "Indeterminate:Indeterminate melanocytic proliferations",
    "Malignant:Collision - At least one malignant proliferation",
    "Malignant:Lymphocytic proliferations - B-Cell",
    "Malignant:Lymphocytic proliferations - T-Cell/NK",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular",
    "Malignant:Malignant adnexal epithelial proliferations - Sebaceous",
    "Malignant:Malignant epidermal proliferations",
    "Malignant:Malignant melanocytic proliferations (Melanoma)",
    "Malignant:Malignant soft tissue proliferations - Adipocytic",
    "Malignant:Malignant soft tissue proliferations - Cartilagenous and ossifying",
    "Malignant:Malignant soft tissue proliferations - Fibro-histiocytic",
    "Malignant:Malignant soft tissue proliferations - Muscle tissue or myofibroblastic",
    "Malignant:Malignant soft tissue proliferations - Myoepithelial",
    "Malignant:Malignant soft tissue proliferations - Neural",
    "Malignant:Malignant soft tissue proliferations - Unknown or other histiogenesis",
    "Malignant:Malignant soft tissue proliferations - Vascular",
    "Malignant:Merkel cell proliferation",
    "Malignant:Skin metastasis of internal solid cancer - non-hematological",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Apocrine tubular adenoma",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Cylindoma",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Cystadenoma",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Fibroadenoma",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Hidradenoma papilliferum",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Hidradenoma, Apocrine",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Hidradenoma",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Mixed tumor",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Poroma",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Spiradenoma",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Supernumerary nipple",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Syringocystadenoma papilliferum",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Syringofibroadenoma",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Syringoma",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Folliculosebaceous cystic hamartoma",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Nevus comedonicus",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Panfolliculoma",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Pilar sheath acanthoma",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Pilomatricoma",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Proliferating tricholemmal tumor",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Trichoblastoma",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Trichoepithelioma",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Trichofolliculoma",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Tricholemmoma",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Tumor of follicular infundibulum",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Warty dyskeratoma",
    "Benign:Benign adnexal epithelial proliferations - Sebaceous:Fibrofolliculoma",
    "Benign:Benign adnexal epithelial proliferations - Sebaceous:Fordyce spots",
    "Benign:Benign adnexal epithelial proliferations - Sebaceous:Nevus sebaceus",
    "Benign:Benign adnexal epithelial proliferations - Sebaceous:Sebaceoma",
    "Benign:Benign adnexal epithelial proliferations - Sebaceous:Sebaceous adenoma",
    "Benign:Benign adnexal epithelial proliferations - Sebaceous:Sebaceous hyperplasia",
    "Benign:Benign adnexal epithelial proliferations - Sebaceous:Trichodiscoma",
    "Benign:Benign epidermal proliferations:Acantholytic acanthoma",
    "Benign:Benign epidermal proliferations:Clear cell acanthoma",
    "Benign:Benign epidermal proliferations:Epidermal nevus",
    "Benign:Benign epidermal proliferations:Epidermolytic acanthoma",
    "Benign:Benign epidermal proliferations:Large cell acanthoma",
    "Benign:Benign epidermal proliferations:Lichen planus like keratosis",
    "Benign:Benign epidermal proliferations:Melanoacanthoma",
    "Benign:Benign epidermal proliferations:Pigmented benign keratosis",
    "Benign:Benign epidermal proliferations:Porokeratosis",
    "Benign:Benign epidermal proliferations:Seborrheic keratosis",
    "Benign:Benign epidermal proliferations:Solar lentigo",
    "Benign:Benign melanocytic proliferations:Nevus",
    "Benign:Benign melanocytic proliferations:Dermal melanocytosis",
    "Benign:Benign melanocytic proliferations:Lentiginous melanocytic proliferation",
    "Benign:Benign melanocytic proliferations:Lentigo simplex",
    "Benign:Benign melanocytic proliferations:Pigmented epithelioid melanocytoma",
    "Benign:Benign melanocytic proliferations:Proliferative nodule in congenital melanocytic nevi without atypia",
    "Benign:Benign soft tissue proliferations - Adipocytic:Angiolipoma",
    "Benign:Benign soft tissue proliferations - Adipocytic:Fibrolipoma",
    "Benign:Benign soft tissue proliferations - Adipocytic:Lipoma",
    "Benign:Benign soft tissue proliferations - Adipocytic:Lipomatous nevus",
    "Benign:Benign soft tissue proliferations - Cartilagenous and ossifying:Accessory tragus",
    "Benign:Benign soft tissue proliferations - Cartilagenous and ossifying:Extraskeletal chondroma",
    "Benign:Benign soft tissue proliferations - Cartilagenous and ossifying:Osteoma cutis",
    "Benign:Benign soft tissue proliferations - Cartilagenous and ossifying:Subungual osteochodroma",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Angiofibroma",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Dermatofibroma",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Fibroepithelial polyp",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Fibroma",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Giant cell tumor of the tendon sheath",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Juvenile xanthogranuloma",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Cutaneous Myxoma",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Non-Langerhans histiocytosis",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Reticulohistiocytosis",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Rosai-Dorfman disease",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Scar",
    "Benign:Benign soft tissue proliferations - Muscle tissue or myofibroblastic:Angioleiomyoma",
    "Benign:Benign soft tissue proliferations - Muscle tissue or myofibroblastic:Dartoic muscle leiomyoma",
    "Benign:Benign soft tissue proliferations - Muscle tissue or myofibroblastic:Dermatomyofibroma",
    "Benign:Benign soft tissue proliferations - Muscle tissue or myofibroblastic:Nodular Fasciitis",
    "Benign:Benign soft tissue proliferations - Muscle tissue or myofibroblastic:Piloleiomyoma",
    "Benign:Benign soft tissue proliferations - Muscle tissue or myofibroblastic:Smooth muscle hamartoma",
    "Benign:Benign soft tissue proliferations - Myoepithelial:Myoepithelioma",
    "Benign:Benign soft tissue proliferations - Neural:Granular cell tumor",
    "Benign:Benign soft tissue proliferations - Neural:Nerve sheath myxoma",
    "Benign:Benign soft tissue proliferations - Neural:Neurofibroma",
    "Benign:Benign soft tissue proliferations - Neural:Plexiform Neurofibroma",
    "Benign:Benign soft tissue proliferations - Neural:Neuroma",
    "Benign:Benign soft tissue proliferations - Neural:Perineurioma",
    "Benign:Benign soft tissue proliferations - Neural:Schwannoma",
    "Benign:Benign soft tissue proliferations - Vascular:Acquired elastotic hemangioma",
    "Benign:Benign soft tissue proliferations - Vascular:Acroangiodermatitis of Mali",
    "Benign:Benign soft tissue proliferations - Vascular:Angiokeratoma",
    "Benign:Benign soft tissue proliferations - Vascular:Angiolymphoid hyperplasia with eosinophilia",
    "Benign:Benign soft tissue proliferations - Vascular:Arterio-venous malformation",
    "Benign:Benign soft tissue proliferations - Vascular:Capillary vascular malformation",
    "Benign:Benign soft tissue proliferations - Vascular:Glomangiomyoma",
    "Benign:Benign soft tissue proliferations - Vascular:Glomeruloid hemangioma",
    "Benign:Benign soft tissue proliferations - Vascular:Glomus tumor",
    "Benign:Benign soft tissue proliferations - Vascular:Hemangioma",
    "Benign:Benign soft tissue proliferations - Vascular:Lymphangioma",
    "Benign:Benign soft tissue proliferations - Vascular:Nevus anemicus",
    "Benign:Benign soft tissue proliferations - Vascular:Noninvoluting congenital hemangioma",
    "Benign:Benign soft tissue proliferations - Vascular:Other vascular or lymphatic malformation or hamartoma",
    "Benign:Benign soft tissue proliferations - Vascular:Pyogenic granuloma",
    "Benign:Benign soft tissue proliferations - Vascular:Rapidly involuting congenital hemangioma",
    "Benign:Benign soft tissue proliferations - Vascular:Telangiectasia",
    "Benign:Benign soft tissue proliferations - Vascular:Vascular spider",
    "Benign:Benign soft tissue proliferations - Vascular:Venous lake",
    "Benign:Benign soft tissue proliferations - Vascular:Venous malformation",
    "Benign:Benign soft tissue proliferations - Vascular:Verrucous hemangioma",
    "Benign:Cysts:Comedo",
    "Benign:Cysts:Digital mucous cyst",
    "Benign:Cysts:Dilated pore",
    "Benign:Cysts:Infundibular or epidermal cyst",
    "Benign:Cysts:Sebaceous cyst",
    "Benign:Cysts:Keratinous cyst",
    "Benign:Cysts:Milium",
    "Benign:Cysts:Steatocystoma",
    "Benign:Cysts:Trichilemmal or isthmic-catagen or pilar cyst",
    "Benign:Exogenous:Foreign body granuloma",
    "Benign:Exogenous:Tattoo",
    "Benign:Flat melanotic pigmentations - not melanocytic nevus:Cafe au lait macule or patch",
    "Benign:Flat melanotic pigmentations - not melanocytic nevus:Ephelis",
    "Benign:Flat melanotic pigmentations - not melanocytic nevus:Ink-spot lentigo",
    "Benign:Flat melanotic pigmentations - not melanocytic nevus:Lentigo NOS",
    "Benign:Flat melanotic pigmentations - not melanocytic nevus:Mucosal melanotic macule",
    "Benign:Hemorrhagic lesions:Hemorrhage",
    "Benign:Inflammatory or infectious diseases:Verruca",
    "Benign:Inflammatory or infectious diseases:Molluscum",
    "Benign:Langerhans cell proliferations:Erdheim Chester disease",
    "Benign:Langerhans cell proliferations:Indeterminate cell histiocytosis",
    "Benign:Langerhans cell proliferations:Langerhans cell histiocytosis",
    "Benign:Langerhans cell proliferations:Mixed Langerhans cell histiocytosis and Erdheim Chester disease",
    "Benign:Mast cell proliferations:Maculopapular mastocytoma",
    "Benign:Mast cell proliferations:Mastocytoma, Solitary or unifocal",
    "Benign:Mast cell proliferations:Mastocytosis",
    "Indeterminate:Indeterminate epidermal proliferations:Solar or actinic cheilitis",
    "Indeterminate:Indeterminate epidermal proliferations:Solar or actinic keratosis",
    "Indeterminate:Indeterminate melanocytic proliferations:Atypical Spitz tumor",
    "Indeterminate:Indeterminate melanocytic proliferations:Atypical intraepithelial melanocytic proliferation",
    "Indeterminate:Indeterminate melanocytic proliferations:Atypical melanocytic neoplasm",
    "Indeterminate:Indeterminate melanocytic proliferations:Atypical pigmented spindle cell tumor",
    "Indeterminate:Indeterminate melanocytic proliferations:Atypical proliferative nodules in congenital melanocytic nevus",
    "Indeterminate:Indeterminate melanocytic proliferations:Melanocytic tumor of uncertain malignant potential",
    "Indeterminate:Indeterminate melanocytic proliferations:Superficial atypical melanocytic proliferation of uncertain significance",
    "Malignant:Lymphocytic proliferations - B-Cell:EBV positive mucocutaneous ulcer",
    "Malignant:Lymphocytic proliferations - B-Cell:Intravascular large B-cell lymphoma",
    "Malignant:Lymphocytic proliferations - B-Cell:Lymphocytic proliferation, B-Cell, other",
    "Malignant:Lymphocytic proliferations - B-Cell:Primary cutaneous follicle center lymphoma",
    "Malignant:Lymphocytic proliferations - B-Cell:Primary cutaneous large B-Cell lymphoma",
    "Malignant:Lymphocytic proliferations - B-Cell:Primary cutaneous marginal zone lymphoma",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Adult T-cell leukemia or lymphoma",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Chronic active EBV infection",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Extranodal T-cell/NK lymphoma",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Lymphocytic proliferation, T-Cell/NK",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Mycosis fungoides",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Primary cutaneous CD30+ lymphoproliferative disease",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Primary cutaneous CD4+ small or medium T-cell lymphoproliferative disorder",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Primary cutaneous peripheral T-cell lymphoma",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Sezary syndrome",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Subcutaneous panniculitis-like T-cell lymphoma",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Adenoid cystic carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Adnexal adenocarcinoma arising in association with spiradenoma, cylindroma, or spiradenocylindroma",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Apocrine carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Digital papillary carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Hidradenocarcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Malignant mixed tumor",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Microcystic adnexal carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Mucinous carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Paget disease",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Porocarcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Tubular carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Baso-squamous carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Matrical or pilomatrical carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Proliferating trichilemmal carcinoma",
    "Malignant:Malignant adnexal epithelial proliferations - Sebaceous:Sebaceous carcinoma",
    "Malignant:Malignant epidermal proliferations:Bowenoid papulosis",
    "Malignant:Malignant epidermal proliferations:Keratoacanthoma",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma in situ",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, NOS",
    "Malignant:Malignant epidermal proliferations:Verrucous carcinoma",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma in situ",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma metastasis",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma, NOS",
    "Malignant:Malignant soft tissue proliferations - Adipocytic:Liposarcoma",
    "Malignant:Malignant soft tissue proliferations - Cartilagenous and ossifying:Extraskeletal osteosarcoma",
    "Malignant:Malignant soft tissue proliferations - Fibro-histiocytic:Atypical fibroxanthoma",
    "Malignant:Malignant soft tissue proliferations - Fibro-histiocytic:Dermatofibrosarcoma protuberans",
    "Malignant:Malignant soft tissue proliferations - Fibro-histiocytic:Epithelioid sarcoma",
    "Malignant:Malignant soft tissue proliferations - Fibro-histiocytic:Fibrosarcoma",
    "Malignant:Malignant soft tissue proliferations - Fibro-histiocytic:Pleomorphic undifferntiated sarcoma",
    "Malignant:Malignant soft tissue proliferations - Muscle tissue or myofibroblastic:Atypical intradermal smooth muscle tumor",
    "Malignant:Malignant soft tissue proliferations - Muscle tissue or myofibroblastic:Leiomyosarcoma, Cutaneous",
    "Malignant:Malignant soft tissue proliferations - Muscle tissue or myofibroblastic:Rhabdomyoscaroma, Cutaneous",
    "Malignant:Malignant soft tissue proliferations - Myoepithelial:Myoepithelial sarcoma",
    "Malignant:Malignant soft tissue proliferations - Neural:Malignant granular cell tumor",
    "Malignant:Malignant soft tissue proliferations - Neural:Malignant peripheral nerve sheath tumor",
    "Malignant:Malignant soft tissue proliferations - Unknown or other histiogenesis:Ewing sarcoma, Primary cutaenous",
    "Malignant:Malignant soft tissue proliferations - Vascular:Angiosarcoma cutaneous",
    "Malignant:Malignant soft tissue proliferations - Vascular:Hemangioendothelioma",
    "Malignant:Malignant soft tissue proliferations - Vascular:Kaposi sarcoma",
    "Malignant:Malignant soft tissue proliferations - Vascular:Malignant glomus tumor",
    "Malignant:Merkel cell proliferation:Merkel cell carcinoma",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Hidradenoma, Apocrine:Hidradenoma, Apocrine, Predominantly with clear cells",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Hidradenoma:Hidradenoma, Poroid",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Mixed tumor:Mixed tumor, Apocrine type",
    "Benign:Benign adnexal epithelial proliferations - Apocrine or Eccrine:Mixed tumor:Mixed tumor, Eccrine type",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Trichoepithelioma:Trichoepithelioma, Desmoplastic",
    "Benign:Benign adnexal epithelial proliferations - Follicular:Tricholemmoma:Tricholemmoma, Desmoplastic",
    "Benign:Benign epidermal proliferations:Seborrheic keratosis:Seborrheic keratosis, Clonal",
    "Benign:Benign melanocytic proliferations:Nevus:Blue nevus",
    "Benign:Benign melanocytic proliferations:Dermal melanocytosis:Mongolian spot",
    "Benign:Benign melanocytic proliferations:Dermal melanocytosis:Nevus of Ito",
    "Benign:Benign melanocytic proliferations:Dermal melanocytosis:Nevus of Ota",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Acral",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Agminated",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Atypical, Dysplastic, or Clark",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, BAP-1 deficient",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Balloon cell",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Combined",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Congenital",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Deep penetrating",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Halo",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Lentiginous",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Meyerson",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, NOS, Compound",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, NOS, Dermal",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, NOS, Junctional",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Of special anatomic site",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Recurrent or persistent",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Reed",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Spilus",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Spitz",
    "Benign:Benign soft tissue proliferations - Adipocytic:Lipoma:Lipoma, Spindle cell",
    "Benign:Benign soft tissue proliferations - Adipocytic:Lipoma:Lipoma, Pleomorphic",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Angiofibroma:Angiofibroma, Facial",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Angiofibroma:Angiofibroma, Penile",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Angiofibroma:Angiofibroma, Periungual",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Dermatofibroma:Dermatofibroma, Aneurysmal",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Dermatofibroma:Dermatofibroma, Atypical",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Dermatofibroma:Dermatofibroma, Cellular",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Dermatofibroma:Dermatofibroma, Epithelioid",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Dermatofibroma:Dermatofibroma, Hemosiderotic",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Fibroma:Fibroma, Pleomorphic",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Fibroma:Fibroma, Sclerotic",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Scar:Scar, Hypertrophic",
    "Benign:Benign soft tissue proliferations - Fibro-histiocytic:Scar:Scar, Keloid",
    "Benign:Benign soft tissue proliferations - Neural:Granular cell tumor:Granular cell tumor, neural and s100 positive",
    "Benign:Benign soft tissue proliferations - Neural:Granular cell tumor:Granular cell tumor, non-neural and s100 negative",
    "Benign:Benign soft tissue proliferations - Neural:Neuroma:Neuroma, Palisaded and encapsulated",
    "Benign:Benign soft tissue proliferations - Neural:Neuroma:Neuroma, Traumatic",
    "Benign:Benign soft tissue proliferations - Vascular:Hemangioma:Hemangioma, Cherry",
    "Benign:Benign soft tissue proliferations - Vascular:Hemangioma:Hemangioma, Hobnail",
    "Benign:Benign soft tissue proliferations - Vascular:Hemangioma:Hemangioma, Infantile",
    "Benign:Benign soft tissue proliferations - Vascular:Hemangioma:Hemangioma, Tufted",
    "Benign:Benign soft tissue proliferations - Vascular:Lymphangioma:Lymphangioma, superficial",
    "Benign:Benign soft tissue proliferations - Vascular:Lymphangioma:Lymphangioma, deep",
    "Benign:Cysts:Sebaceous cyst:Infundibular, Sebaceous",
    "Benign:Cysts:Sebaceous cyst:Epidermal, Sebaceous",
    "Benign:Cysts:Keratinous cyst:Infundibular, Keratinous",
    "Benign:Cysts:Keratinous cyst:Epidermal, Keratinous",
    "Benign:Cysts:Trichilemmal or isthmic-catagen or pilar cyst:Trichilemmal cyst",
    "Benign:Cysts:Trichilemmal or isthmic-catagen or pilar cyst:Isthmic-catagen cyst",
    "Benign:Cysts:Trichilemmal or isthmic-catagen or pilar cyst:Pilar cyst",
    "Benign:Hemorrhagic lesions:Hemorrhage:Dermal and subcutaneous hemorhage",
    "Benign:Hemorrhagic lesions:Hemorrhage:Mucosal hemorrhage",
    "Benign:Hemorrhagic lesions:Hemorrhage:Subcorneal and intracorneal hemorrhage",
    "Benign:Hemorrhagic lesions:Hemorrhage:Subungual hemorrhage",
    "Benign:Langerhans cell proliferations:Langerhans cell histiocytosis:Langerhans cell histiocytosis, Diffuse or multifocal",
    "Benign:Langerhans cell proliferations:Langerhans cell histiocytosis:Langerhans cell histiocytosis, Solitary or unifocal",
    "Benign:Mast cell proliferations:Mastocytosis:Mastocytosis, Diffuse or multifocal",
    "Indeterminate:Indeterminate epidermal proliferations:Solar or actinic keratosis:Actinic keratosis, Acantholytic",
    "Indeterminate:Indeterminate epidermal proliferations:Solar or actinic keratosis:Actinic keratosis, Atrophic",
    "Indeterminate:Indeterminate epidermal proliferations:Solar or actinic keratosis:Actinic keratosis, Bowenoid",
    "Indeterminate:Indeterminate epidermal proliferations:Solar or actinic keratosis:Actinic keratosis, Hypertrophic",
    "Indeterminate:Indeterminate epidermal proliferations:Solar or actinic keratosis:Actinic keratosis, Lichenoid",
    "Indeterminate:Indeterminate melanocytic proliferations:Atypical Spitz tumor:Atypical Spitz tumor, Compound",
    "Indeterminate:Indeterminate melanocytic proliferations:Atypical Spitz tumor:Atypical Spitz tumor, Dermal",
    "Indeterminate:Indeterminate melanocytic proliferations:Atypical Spitz tumor:Atypical Spitz tumor, Junctional",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Extranodal T-cell/NK lymphoma:Extranodal T-cell/NK lymphoma, Nasal type",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Mycosis fungoides:Mycosis fungoides, Folliculotropic",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Mycosis fungoides:Mycosis fungoides, Granulomatous slack skin",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Mycosis fungoides:Mycosis fungoides, Pagetoid reticulosis",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Mycosis fungoides:Mycosis fungoides, With large cell transformation",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Primary cutaneous CD30+ lymphoproliferative disease:Cutanous anaplastic large cell lymphoma",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Primary cutaneous CD30+ lymphoproliferative disease:Lymphomatoid papulosis",
    "Malignant:Lymphocytic proliferations - T-Cell/NK:Primary cutaneous peripheral T-cell lymphoma:Primary cutaneous peripheral T-cell lymphoma, Rare subtype",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Paget disease:Paget disease, Extra-mammary",
    "Malignant:Malignant adnexal epithelial proliferations - Apocrine or Eccrine:Paget disease:Paget disease, Mammary",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma:Basal cell carcinoma with adnexal differentiation",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma:Basal cell carcinoma with sarcomatoid differentiation",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma:Basal cell carcinoma, Combined subtypes",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma:Basal cell carcinoma, Fibroeipthelial",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma:Basal cell carcinoma, Infiltrating",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma:Basal cell carcinoma, Micronodular",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma:Basal cell carcinoma, Nodular",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma:Basal cell carcinoma, Sclerosing or morpheaform",
    "Malignant:Malignant adnexal epithelial proliferations - Follicular:Basal cell carcinoma:Basal cell carcinoma, Superficial",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma in situ:Squamous cell carcinoma in situ, Bowens disease",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Acantholytic",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Adeno-squamous",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Clear cell",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Keratoacanthoma-type",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Sarcomatoid",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Spindle cell",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Verrucous",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, NOS, well differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, NOS, moderately differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, NOS, poorly differentiated",
    "Malignant:Malignant epidermal proliferations:Verrucous carcinoma:Verrucous carcinoma, Carcinoma cuniculatum type",
    "Malignant:Malignant epidermal proliferations:Verrucous carcinoma:Verrucous carcinoma, Giant condyloma type",
    "Malignant:Malignant epidermal proliferations:Verrucous carcinoma:Verrucous carcinoma, Oral florid papilomatosis type",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Acral or Acral-lentiginous",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Arising in a congenital nevus",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Associated with a nevus",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Blue nevus-like",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Desmoplastic",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Heavily pigmented",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Mucosal",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Neurotropic",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Nevoid",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Nodular",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, On chronically sun-exposed skin or lentigo maligna melanoma",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Pigmented spindle cell nevus like",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Recurrent or persistent",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Spitzoid",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Superficial spreading",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma in situ:Melanoma in situ, Acral or acral-lentiginous",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma in situ:Melanoma in situ, Lentigo maligna type",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma in situ:Melanoma in situ, Mucosal",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma in situ:Melanoma in situ, Recurrent or persistent",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma in situ:Melanoma in situ, Superficial spreading",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma in situ:Melanoma in situ, associated with a nevus",
    "Malignant:Malignant soft tissue proliferations - Adipocytic:Liposarcoma:Liposarcoma, Undifferentiated",
    "Malignant:Malignant soft tissue proliferations - Adipocytic:Liposarcoma:Liposarcoma, Well differentiated",
    "Malignant:Malignant soft tissue proliferations - Vascular:Angiosarcoma cutaneous:Angiosarcoma cutaneous, Epithelioid",
    "Malignant:Malignant soft tissue proliferations - Vascular:Angiosarcoma cutaneous:Angiosarcoma cutaneous, Face and scalp of elderly patients",
    "Malignant:Malignant soft tissue proliferations - Vascular:Angiosarcoma cutaneous:Angiosarcoma cutaneous, Post-irradiation",
    "Malignant:Malignant soft tissue proliferations - Vascular:Angiosarcoma cutaneous:Angiosarcoma cutaneous, With associated lymphedema",
    "Malignant:Malignant soft tissue proliferations - Vascular:Hemangioendothelioma:Hemangioendothelioma, Kaposiform",
    "Benign:Benign melanocytic proliferations:Nevus:Blue nevus:Blue nevus, Cellular",
    "Benign:Benign melanocytic proliferations:Nevus:Blue nevus:Blue nevus, Common",
    "Benign:Benign melanocytic proliferations:Nevus:Blue nevus:Blue nevus, Epithelioid",
    "Benign:Benign melanocytic proliferations:Nevus:Blue nevus:Blue nevus, Plaque type",
    "Benign:Benign melanocytic proliferations:Nevus:Blue nevus:Blue nevus, Sclerosing",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Atypical, Dysplastic, or Clark:Nevus, Atypical",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Atypical, Dysplastic, or Clark:Nevus, Dysplastic",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Atypical, Dysplastic, or Clark:Nevus, Clark",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Congenital:Nevus, Congenital, by history",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Congenital:Nevus, Congenital, by histopathological pattern",
    "Benign:Benign melanocytic proliferations:Nevus:Nevus, Congenital:Nevus, Congenital, by history and histopathological pattern",
    "Benign:Mast cell proliferations:Mastocytosis:Mastocytosis, Diffuse or multifocal:Telangiectasia macularis eruptiva perstans",
    "Benign:Mast cell proliferations:Mastocytosis:Mastocytosis, Diffuse or multifocal:Mastocytosis, Diffuse cutaenous",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Acantholytic:Squamous cell carcinoma, Invasive, Acantholytic, well differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Acantholytic:Squamous cell carcinoma, Invasive, Acantholytic, moderately differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Acantholytic:Squamous cell carcinoma, Invasive, Acantholytic, poorly differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Adeno-squamous:Squamous cell carcinoma, Invasive, Adeno-squamous, well differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Adeno-squamous:Squamous cell carcinoma, Invasive, Adeno-squamous, moderately differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Adeno-squamous:Squamous cell carcinoma, Invasive, Adeno-squamous, poorly differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Clear cell:Squamous cell carcinoma, Invasive, Clear cell, well differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Clear cell:Squamous cell carcinoma, Invasive, Clear cell, moderately differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Clear cell:Squamous cell carcinoma, Invasive, Clear cell, poorly differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Keratoacanthoma-type:Squamous cell carcinoma, Invasive, Keratoacanthoma-type, well differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Keratoacanthoma-type:Squamous cell carcinoma, Invasive, Keratoacanthoma-type, moderately differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Keratoacanthoma-type:Squamous cell carcinoma, Invasive, Keratoacanthoma-type, poorly differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Sarcomatoid:Squamous cell carcinoma, Invasive, Sarcomatoid, well differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Sarcomatoid:Squamous cell carcinoma, Invasive, Sarcomatoid, moderately differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Sarcomatoid:Squamous cell carcinoma, Invasive, Sarcomatoid, poorly differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Spindle cell:Squamous cell carcinoma, Invasive, Spindle cell, well differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Spindle cell:Squamous cell carcinoma, Invasive, Spindle cell, moderately differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Spindle cell:Squamous cell carcinoma, Invasive, Spindle cell, poorly differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Verrucous:Squamous cell carcinoma, Invasive, Verrucous, well differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Verrucous:Squamous cell carcinoma, Invasive, Verrucous, moderately differentiated",
    "Malignant:Malignant epidermal proliferations:Squamous cell carcinoma, Invasive:Squamous cell carcinoma, Invasive, Verrucous:Squamous cell carcinoma, Invasive, Verrucous, poorly differentiated",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Blue nevus-like:Melanoma Invasive, resembling blue nevus",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Blue nevus-like:Melanoma Invasive, originating from blue nevus",
    "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive:Melanoma Invasive, Heavily pigmented:Melanoma Invasive, Heavily pigmented, resembling epithelioid blue nevus or melanoma developing in animals",
];
